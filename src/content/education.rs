use super::models::{Achievement, Certificate, EducationRecord};

pub const EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        id: "uthm",
        degree: "Bachelor of Electronic Engineering",
        institution: "Universiti Tun Hussein Onn",
        location: "Batu Pahat, Johor",
        period: "Oct 2021 - Feb 2025",
        description: "Relevant coursework in electronic engineering and computer science.",
        icon: "🎓",
    },
    EducationRecord {
        id: "pmm",
        degree: "Diploma in Electrical Engineering",
        institution: "Politeknik Merlimau Melaka",
        location: "Merlimau, Melaka",
        period: "Dec 2017 - Jun 2020",
        description: "Graduate with Honors.",
        icon: "📘",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate { id: "meta1", name: "Django Web Framework", issuer: "Meta (Coursera)", year: "2024" },
    Certificate {
        id: "meta2",
        name: "Introduction to Databases for Back-End Development",
        issuer: "Meta (Coursera)",
        year: "2024",
    },
    Certificate { id: "meta3", name: "Introduction to Front-End Development", issuer: "Meta (Coursera)", year: "2024" },
    Certificate { id: "meta4", name: "Programming in Python", issuer: "Meta (Coursera)", year: "2024" },
    Certificate { id: "meta5", name: "Version Control", issuer: "Meta (Coursera)", year: "2024" },
    Certificate { id: "cisco", name: "JavaScript Essentials 1", issuer: "Cisco", year: "2024" },
];

pub const ACHIEVEMENTS: &[Achievement] = &[Achievement {
    id: "scholarship",
    title: "Global Korea Scholarship",
    description: "Awarded a fully funded scholarship by the Korean government to pursue exchange studies.",
    year: "2024",
}];
