/// Records that can be bucketed by a category tab.
pub trait Categorized {
    type Category: PartialEq + Clone;

    fn in_category(&self, category: &Self::Category) -> bool;
}

/// The active tab of a category filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq + Clone> CategoryFilter<C> {
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Categorized<Category = C>,
    {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.in_category(category),
        }
    }

    /// Order-preserving subset of `items` in this bucket.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    pub fn count<T>(&self, items: &[T]) -> usize
    where
        T: Categorized<Category = C>,
    {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    pub fn is_selected(&self, category: &C) -> bool {
        matches!(self, CategoryFilter::Only(c) if c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::experience::EXPERIENCES;
    use crate::content::models::{ExperienceCategory, SkillCategory};
    use crate::content::projects::PROJECTS;
    use crate::content::skills::SKILLS;
    use pretty_assertions::assert_eq;

    #[test]
    fn engineering_filter_keeps_relative_order() {
        assert_eq!(EXPERIENCES.len(), 7);

        let filter = CategoryFilter::Only(ExperienceCategory::Engineering);
        let ids: Vec<&str> = filter.apply(EXPERIENCES).iter().map(|e| e.id).collect();

        assert_eq!(ids, vec!["emerson", "petronas", "lanefour-1", "lanefour-2"]);
    }

    #[test]
    fn all_returns_full_list_unchanged() {
        let filter: CategoryFilter<ExperienceCategory> = CategoryFilter::All;
        let filtered = filter.apply(EXPERIENCES);

        assert_eq!(filtered.len(), EXPERIENCES.len());
        for (kept, original) in filtered.iter().zip(EXPERIENCES.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn every_bucket_is_a_subset_satisfying_the_predicate() {
        for category in SkillCategory::ALL {
            let filter = CategoryFilter::Only(category);
            let filtered = filter.apply(SKILLS);

            assert!(filtered.len() <= SKILLS.len());
            assert!(filtered.iter().all(|s| s.category == category));
            assert_eq!(filtered.len(), filter.count(SKILLS));
        }

        let total: usize = SkillCategory::ALL
            .iter()
            .map(|c| CategoryFilter::Only(*c).count(SKILLS))
            .sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn tag_filter_on_projects() {
        let iot = CategoryFilter::Only("IoT").apply(PROJECTS);
        assert_eq!(iot.len(), 1);
        assert_eq!(iot[0].id, "iot-water");

        assert!(CategoryFilter::Only("Cobol").apply(PROJECTS).is_empty());
    }

    #[test]
    fn selection_check() {
        let filter = CategoryFilter::Only(SkillCategory::Tools);
        assert!(filter.is_selected(&SkillCategory::Tools));
        assert!(!filter.is_selected(&SkillCategory::Programming));
        assert!(!CategoryFilter::<SkillCategory>::All.is_selected(&SkillCategory::Tools));
    }
}
