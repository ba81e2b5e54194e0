use super::models::{NavLink, SocialLink, Specialization};

pub const DISPLAY_NAME: &str = "Isshahrul Isskandar";
pub const FULL_NAME: &str = "Ahmad Isshahrul Isskandar";
pub const ROLE: &str = "Electronic Engineer & Software Developer";
pub const EMAIL: &str = "isshahrulisskandar@gmail.com";
pub const LOCATION: &str = "Petaling Jaya, Selangor, Malaysia";
pub const TAGLINE: &str = "Fresh graduate specializing in software development with experience in testing, frontend and backend development.";
pub const FOOTER_BLURB: &str = "Electronic Engineer specializing in software development and quality assurance.";

/// Hero title animation: text and how long to hold it once typed.
pub const HERO_NAMES: &[(&str, u32)] = &[("Ahmad Isshahrul", 1000), (FULL_NAME, 2000)];

pub const HERO_SPECIALTIES: &[(&str, &str)] = &[
    ("🔌", "Electronic Engineering"),
    ("</>", "Software Development"),
    ("🗄", "Test Engineering"),
    ("🔁", "IoT Projects"),
];

pub const HERO_STACK: &[&str] = &["JS", "C#", "Python", "Angular"];

pub const SUMMARY: &[&str] = &[
    "Fresh graduate with a Bachelor's degree in Electronic Engineering from Universiti Tun Hussein Onn (UTHM), specializing in software development and quality assurance. Experienced in software testing, front-end and back-end development using Node.js and Angular, and establishing best practices for software reliability during an internship at Petronas Digital.",
    "Skilled in C programming, JavaScript, manual testing, data management, hardware troubleshooting, and AutoCAD. Certified from online courses, with hands-on experience in IoT projects and data synchronization systems. Eager to contribute to dynamic IT or engineering environments, focusing on innovation, technical excellence, and customer satisfaction.",
];

pub const SPECIALIZATION_LABELS: &[(&str, &str)] = &[
    ("</>", "Software Development"),
    ("🖥", "Quality Assurance"),
    ("🔌", "IoT & Electronics"),
    ("💼", "Technical Support"),
];

pub const SPECIALIZATIONS: &[Specialization] = &[
    Specialization { name: "Software Dev", value: 75, color: (0x4f, 0x46, 0xe5) },
    Specialization { name: "QA Testing", value: 85, color: (0x10, 0xb9, 0x81) },
    Specialization { name: "IoT", value: 65, color: (0xf9, 0x73, 0x16) },
    Specialization { name: "Tech Support", value: 80, color: (0x06, 0xb6, 0xd4) },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Education", href: "#education" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/", icon: "GH" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/", icon: "in" },
    SocialLink { label: "Email", href: "mailto:isshahrulisskandar@gmail.com", icon: "@" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#') && l.href.len() > 1));
    }

    #[test]
    fn hero_ends_on_full_name() {
        assert_eq!(HERO_NAMES.last().map(|(name, _)| *name), Some(FULL_NAME));
        assert!(SPECIALIZATIONS.iter().all(|s| s.value <= 100));
    }
}
