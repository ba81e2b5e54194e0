use super::models::{DetailSection, Project};

const FUSIONSYNC_DETAILS: &[DetailSection] = &[
    DetailSection {
        heading: "The Problem That Started It All",
        paragraphs: &[
            "A lecturer finishes grading assignments in System A, an Oracle-based grading system. To share grades with students, they have to re-enter all the data by hand into System B, the university's Learning Management System.",
            "This repeats every semester. Hundreds of grades, hours wasted, countless errors.",
        ],
        bullets: &[],
    },
    DetailSection {
        heading: "The Mission",
        paragraphs: &[
            "FusionSync is a middleware that synchronizes academic data between the grading database and the LMS, so an update in System A shows up in System B in real time.",
        ],
        bullets: &[
            "No more manual data entry",
            "No more mismatched grades",
            "Shared course templates across both systems",
        ],
    },
    DetailSection {
        heading: "How It Works",
        paragraphs: &[],
        bullets: &[
            "A lecturer updates student grades in System A.",
            "FusionSync detects the change.",
            "The data is transformed to match System B's structure.",
            "The updated grades are pushed to System B.",
            "Students see their grades immediately.",
        ],
    },
    DetailSection {
        heading: "Technology",
        paragraphs: &[],
        bullets: &[
            "Backend: Node.js & Express.js",
            "Frontend: HTML, CSS, JavaScript",
            "Database: Oracle (System A) + MongoDB (System B)",
            "Sync: webhooks with polling fallback",
            "Security: JWT authentication and encryption",
            "Deployment: Docker",
        ],
    },
    DetailSection {
        heading: "What We Measured",
        paragraphs: &[],
        bullets: &[
            "Manual entry error rate dropped from 15% to nearly 0%.",
            "Sync time went from 3-5 hours per session to milliseconds.",
            "Lecturers saved up to 50% of the time previously spent on data entry.",
        ],
    },
    DetailSection {
        heading: "Challenges",
        paragraphs: &[
            "Different data structures in each system were handled by a transformation layer. Event-driven webhooks replaced continuous polling to keep server load down. Role-based access and JWT protected student records.",
        ],
        bullets: &[],
    },
    DetailSection {
        heading: "My Role",
        paragraphs: &[],
        bullets: &[
            "Architected the middleware and its data flow.",
            "Developed the REST APIs.",
            "Implemented and tuned the synchronization.",
            "Integrated authentication and security.",
            "Led testing and performance validation.",
        ],
    },
];

const IOT_WATER_DETAILS: &[DetailSection] = &[
    DetailSection {
        heading: "The Problem",
        paragraphs: &[
            "Cattle farmers fill water tanks, measure feed and mix nutrients by hand every day. It is slow, error prone and costly.",
        ],
        bullets: &[
            "A forgotten refill leaves cattle thirsty.",
            "Incorrect mixing leads to malnutrition.",
            "Overflowing tanks waste water.",
        ],
    },
    DetailSection {
        heading: "The Solution",
        paragraphs: &[
            "An integrated IoT water management and nutrient delivery system that keeps water and feed supply topped up with no manual effort.",
        ],
        bullets: &[
            "Automated water level control",
            "Nutrient mixing and dispensing",
            "Real-time monitoring via a mobile app",
        ],
    },
    DetailSection {
        heading: "How It Works",
        paragraphs: &[
            "Sensors track water levels in the feeder tanks and valves open or close to prevent overflows and shortages. Dosage is calculated from the feeding schedule and a DC motor mixer distributes nutrients evenly. The farmer gets live updates and low-water alerts through the Blynk app.",
        ],
        bullets: &[],
    },
    DetailSection {
        heading: "Results",
        paragraphs: &[],
        bullets: &[
            "Water waste reduced by 85% through precise control.",
            "Consistent nutrient delivery improved cattle growth and well-being.",
            "Manual labour reduced by 60% with 24/7 remote monitoring.",
        ],
    },
];

const SMART_GROCERY_DETAILS: &[DetailSection] = &[
    DetailSection {
        heading: "Goal",
        paragraphs: &[
            "Help users manage their fridge inventory, plan meals and generate grocery lists from the ingredients they already have, reducing food waste and saving money.",
        ],
        bullets: &[],
    },
    DetailSection {
        heading: "Core Features",
        paragraphs: &[],
        bullets: &[
            "Inventory management with barcode scanning and expiry notifications",
            "Recipe suggestions based on available ingredients",
            "Auto-generated grocery lists for missing ingredients",
            "Price comparison across Malaysian supermarkets (planned)",
            "Budget tracking (planned)",
        ],
    },
    DetailSection {
        heading: "Technical Details",
        paragraphs: &[],
        bullets: &[
            "Frontend: React Native",
            "Backend: Firebase / Node.js with Express",
            "Database: Firestore / SQLite",
            "Barcode scanning: ZXing",
        ],
    },
    DetailSection {
        heading: "Development Timeline",
        paragraphs: &[],
        bullets: &[
            "Phase 1: inventory and meal suggestions (1-2 months)",
            "Phase 2: grocery list and price comparison (2-3 months)",
            "Phase 3: budget tracker, profiles and notifications (2 months)",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "fusionsync",
        title: "Fusionsync: Bridging System For Seamless Data Synchronization And Template Integration",
        description: "Final year project focused on developing a system for seamless data synchronization between different platforms and template integration, enhancing workflow efficiency and data consistency.",
        year: "2024",
        tags: &["Data Synchronization", "API Integration", "Template System"],
        icon: "🗄",
        gallery: &[
            "/assets/projects/fusionsync-architecture.webp",
            "/assets/projects/fusionsync-dashboard.webp",
            "/assets/projects/fusionsync-templates.webp",
        ],
        details: Some(FUSIONSYNC_DETAILS),
    },
    Project {
        id: "iot-water",
        title: "Integrated IoT Water Management and Nutrient Delivery System for Cattle Feeding",
        description: "Designed and implemented an IoT-based system for monitoring and managing water resources and nutrient delivery for livestock, improving efficiency and reducing waste.",
        year: "2024",
        tags: &["IoT", "Water Management", "Embedded Systems"],
        icon: "🌐",
        gallery: &["/assets/projects/iot-water-prototype.webp", "/assets/projects/iot-water-blynk.webp"],
        details: Some(IOT_WATER_DETAILS),
    },
    Project {
        id: "smart-grocery",
        title: "Smart Grocery & Meal Planner",
        description: "A mobile app that tracks fridge inventory, suggests recipes from what is on hand and builds grocery lists for whatever is missing.",
        year: "2025",
        tags: &["Mobile App", "React Native", "Firebase"],
        icon: "🛒",
        gallery: &[],
        details: Some(SMART_GROCERY_DETAILS),
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Every distinct tag, in first-seen order.
pub fn project_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in PROJECTS.iter().flat_map(|p| p.tags.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::GalleryCursor;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_project("iot-water").map(|p| p.year), Some("2024"));
        assert!(find_project("missing").is_none());
    }

    #[test]
    fn fusionsync_gallery_wraps() {
        let project = find_project("fusionsync").unwrap();
        let cursor = GalleryCursor::new(project.gallery.len());
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.previous().current(project.gallery), project.gallery.last());
    }

    #[test]
    fn tags_are_deduplicated() {
        let tags = project_tags();
        let unique: HashSet<&str> = tags.iter().copied().collect();
        assert_eq!(unique.len(), tags.len());
        assert_eq!(tags.first(), Some(&"Data Synchronization"));
    }
}
