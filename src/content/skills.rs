use super::models::{Skill, SkillCategory};

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", proficiency: 80, category: SkillCategory::Programming },
    Skill { name: "C#", proficiency: 75, category: SkillCategory::Programming },
    Skill { name: "JavaScript", proficiency: 85, category: SkillCategory::Programming },
    Skill { name: "AngularJS", proficiency: 80, category: SkillCategory::Programming },
    Skill { name: "HTML", proficiency: 90, category: SkillCategory::Programming },
    Skill { name: "CSS", proficiency: 75, category: SkillCategory::Programming },
    Skill { name: "Test Plan Creation", proficiency: 85, category: SkillCategory::Technical },
    Skill { name: "Manual Testing", proficiency: 90, category: SkillCategory::Technical },
    Skill { name: "Microsoft Azure", proficiency: 70, category: SkillCategory::Tools },
    Skill { name: "Git", proficiency: 75, category: SkillCategory::Tools },
    Skill { name: "MySQL", proficiency: 80, category: SkillCategory::Tools },
    Skill { name: "Software Troubleshooting", proficiency: 85, category: SkillCategory::Technical },
];

/// Broad areas shown under the skill bars.
pub struct SkillArea {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SKILL_AREAS: &[SkillArea] = &[
    SkillArea { icon: "🔌", title: "Electronics", description: "Circuit design, microcontrollers, IoT" },
    SkillArea { icon: "🖥", title: "Backend", description: "Node.js, APIs, databases" },
    SkillArea { icon: "🧪", title: "Testing", description: "Test plans, QA processes" },
    SkillArea { icon: "📄", title: "Documentation", description: "Technical writing, SOP creation" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::SkillLevel;

    #[test]
    fn proficiency_is_a_percentage() {
        assert!(SKILLS.iter().all(|s| s.proficiency <= 100));
    }

    #[test]
    fn level_bands() {
        assert_eq!(SkillLevel::from_proficiency(100), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_proficiency(90), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_proficiency(89), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_proficiency(75), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_proficiency(74), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_proficiency(60), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_proficiency(59), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_proficiency(0), SkillLevel::Beginner);
    }

    #[test]
    fn every_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(SKILLS.iter().any(|s| s.category == category), "{:?}", category);
        }
    }
}
