use super::models::{ExperienceCategory, WorkExperience};

const LANEFOUR_DUTIES: &[&str] = &[
    "Conducted wiring and soldering for mechanical and electrical assemblies by following technical diagrams, ensuring high-quality RTU box construction for TNB.",
    "Performed functional tests to identify potential issues early, enhancing the overall reliability of the final product.",
    "Followed strict safety protocols during assembly, mitigating risks and ensuring compliance with industry standards.",
    "Supported the team by troubleshooting assembly issues, reducing delays and optimizing production time.",
];

pub const EXPERIENCES: &[WorkExperience] = &[
    WorkExperience {
        id: "emerson",
        title: "AutoCAD Engineer",
        organization: "Emerson",
        location: "Petaling Jaya, Selangor",
        period: "Feb 2025 - Present",
        description: &[
            "Created detailed electrical loop drawings using AutoCAD under the guidance of a Senior Drafter to ensure accurate documentation and minimize wiring errors.",
            "Developed and updated wiring diagrams by interpreting engineering specifications to improve system assembly and troubleshooting efficiency.",
            "Reviewed and revised electrical loop drawings to ensure compliance with industry standards, reducing potential field errors.",
            "Collaborated with the Senior Drafter to optimize design processes and enhance the clarity of electrical diagrams for stakeholders.",
            "Prepared final project documentation by consolidating drawings and revisions to ensure ease of future system maintenance.",
            "Assisted in resolving design issues during project execution to minimize delays through quick design adjustments.",
            "Managed drawing version control and organization to ensure easy access to updated diagrams and enhance project traceability.",
        ],
        category: ExperienceCategory::Engineering,
        tag: Some("Freelance"),
    },
    WorkExperience {
        id: "starbucks",
        title: "Part Time Barista",
        organization: "Starbucks",
        location: "Petaling Jaya, Selangor",
        period: "Dec 2021 - Present",
        description: &[
            "Educated customers on coffee brewing and products through personalized service, leading to increased upselling success and customer loyalty.",
            "Managed inventory by monitoring and restocking supplies, ensuring product availability and smooth operations.",
            "Delivered exceptional service by promptly addressing customer needs and managing orders, enhancing customer satisfaction.",
            "Demonstrated time management by completing all daily tasks efficiently, contributing to overall operational success.",
        ],
        category: ExperienceCategory::Service,
        tag: None,
    },
    WorkExperience {
        id: "petronas",
        title: "Software Engineer & Testing",
        organization: "Petronas Digital",
        location: "Wilayah Persekutuan, Kuala Lumpur",
        period: "July 2023 - April 2024",
        description: &[
            "Created detailed test plans and cases for user acceptance testing by collaborating with coworker and business analyst, ensuring software met customer requirements and improved reliability.",
            "Documented best practices and streamlined procedures for software testing, leading to greater accuracy and defect reduction.",
            "Developed backend services using Node.js and built frontend interfaces with Angular, accelerating production deployment.",
            "Supported the development and testing of new software applications by coordinating with cross-functional teams, ensuring a smooth transition to production.",
        ],
        category: ExperienceCategory::Engineering,
        tag: Some("Internship"),
    },
    WorkExperience {
        id: "snowflakes",
        title: "Part Time Dessert Crew",
        organization: "Snowflakes Sunway Pyramid",
        location: "Petaling Jaya, Selangor",
        period: "Jan 2019 - Dec 2021",
        description: &[
            "Prepared and served desserts by following SOPs, ensuring consistent quality and timely service.",
            "Assisted in training new team members by demonstrating best practices, promoting efficiency and teamwork.",
            "Boosted sales by applying upselling techniques and engaging with customers, leading to higher revenue.",
            "Maintained dining area cleanliness by adhering to 70-second rules, ensuring a positive dining experience.",
            "Supported the team leader by creating work schedules, optimizing staff coordination and coverage.",
        ],
        category: ExperienceCategory::Service,
        tag: None,
    },
    WorkExperience {
        id: "serveconnect",
        title: "IT Technician Support",
        organization: "Serveconnect",
        location: "Cheras, Kuala Lumpur",
        period: "April 2021 - Oct 2021",
        description: &[
            "Assembled PCs from scratch, partitioned storage based on standards, and updated BIOS configurations to enhance system performance and readiness.",
            "Installed the latest drivers and loaded specified software packages, ensuring all systems met operational requirements.",
            "Conducted quality control tests by running diagnostics and resolving hardware or software issues, ensuring proper functionality.",
            "Provided hands-on user training on equipment and software usage, increasing user confidence and reducing IT support needs.",
            "Maintained servers, firewalls, and CCTV systems through routine monitoring, ensuring system stability and data security.",
            "Troubleshot and resolved user-reported IT issues quickly, minimizing system downtimes and improving overall user satisfaction.",
        ],
        category: ExperienceCategory::Support,
        tag: None,
    },
    WorkExperience {
        id: "lanefour-1",
        title: "Electrical Technician",
        organization: "Lanefour",
        location: "Shah Alam, Selangor",
        period: "Dec 2020 - March 2021",
        description: LANEFOUR_DUTIES,
        category: ExperienceCategory::Engineering,
        tag: None,
    },
    WorkExperience {
        id: "lanefour-2",
        title: "Electrical Technician Internship",
        organization: "Lanefour",
        location: "Shah Alam, Selangor",
        period: "July 2020 - Nov 2020",
        description: LANEFOUR_DUTIES,
        category: ExperienceCategory::Engineering,
        tag: Some("Internship"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = EXPERIENCES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EXPERIENCES.len());
    }

    #[test]
    fn every_role_lists_duties() {
        for exp in EXPERIENCES {
            assert!(!exp.description.is_empty(), "{}", exp.id);
            assert!(exp.description.iter().all(|duty| !duty.trim().is_empty()), "{}", exp.id);
        }
    }
}
