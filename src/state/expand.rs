use std::collections::BTreeSet;

/// Which list items have their detail panel open.
///
/// Items expand independently of each other, so toggling one id never
/// collapses another and a double toggle always restores the prior state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    open: BTreeSet<String>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Returns whether `id` is open afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn double_toggle_restores_state() {
        let start = Expansion::with_open(["petronas"]);

        for id in ["petronas", "emerson", "starbucks"] {
            assert_eq!(start.toggled(id).toggled(id), start);
        }
    }

    #[test]
    fn items_expand_independently() {
        let mut expansion = Expansion::new();
        assert!(expansion.toggle("emerson"));
        assert!(expansion.toggle("starbucks"));

        assert!(expansion.is_open("emerson"));
        assert!(expansion.is_open("starbucks"));
        assert_eq!(expansion.open_count(), 2);

        assert!(!expansion.toggle("emerson"));
        assert!(!expansion.is_open("emerson"));
        assert!(expansion.is_open("starbucks"));
    }

    #[test]
    fn collapse_all_clears() {
        let mut expansion = Expansion::with_open(["a", "b"]);
        expansion.collapse_all();
        assert_eq!(expansion, Expansion::new());
    }
}
