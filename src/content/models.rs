use std::fmt;

use crate::state::filter::Categorized;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExperienceCategory {
    Engineering,
    Service,
    Support,
}

impl ExperienceCategory {
    pub const ALL: [ExperienceCategory; 3] = [
        ExperienceCategory::Engineering,
        ExperienceCategory::Service,
        ExperienceCategory::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceCategory::Engineering => "Engineering",
            ExperienceCategory::Service => "Service",
            ExperienceCategory::Support => "Support",
        }
    }
}

impl fmt::Display for ExperienceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkExperience {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
    pub category: ExperienceCategory,
    pub tag: Option<&'static str>,
}

impl Categorized for WorkExperience {
    type Category = ExperienceCategory;

    fn in_category(&self, category: &ExperienceCategory) -> bool {
        self.category == *category
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Programming,
    Technical,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Programming,
        SkillCategory::Technical,
        SkillCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming Languages",
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Tools => "Tools & Technologies",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Programming => "</>",
            SkillCategory::Technical => "🧠",
            SkillCategory::Tools => "⌨",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub proficiency: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn level(&self) -> SkillLevel {
        SkillLevel::from_proficiency(self.proficiency)
    }
}

impl Categorized for Skill {
    type Category = SkillCategory;

    fn in_category(&self, category: &SkillCategory) -> bool {
        self.category == *category
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Expert,
        SkillLevel::Advanced,
        SkillLevel::Intermediate,
        SkillLevel::Beginner,
    ];

    pub fn from_proficiency(proficiency: u8) -> Self {
        match proficiency {
            90.. => SkillLevel::Expert,
            75..=89 => SkillLevel::Advanced,
            60..=74 => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }

    pub fn legend(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert (90-100%)",
            SkillLevel::Advanced => "Advanced (75-89%)",
            SkillLevel::Intermediate => "Intermediate (60-74%)",
            SkillLevel::Beginner => "Beginner (0-59%)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SkillLevel::Expert => "#22c55e",
            SkillLevel::Advanced => "var(--accent)",
            SkillLevel::Intermediate => "#f59e0b",
            SkillLevel::Beginner => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub tags: &'static [&'static str],
    pub icon: &'static str,
    pub gallery: &'static [&'static str],
    pub details: Option<&'static [DetailSection]>,
}

impl Categorized for Project {
    type Category = &'static str;

    fn in_category(&self, tag: &&'static str) -> bool {
        self.tags.contains(tag)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationRecord {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// One bar in the specializations chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Specialization {
    pub name: &'static str,
    pub value: u8,
    pub color: (u8, u8, u8),
}
