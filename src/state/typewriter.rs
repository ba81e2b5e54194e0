#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Looping type-then-erase animation over a fixed list of phrases.
///
/// Erasing only goes back to the prefix shared with the next phrase, so
/// "Ahmad Isshahrul" → "Ahmad Isshahrul Isskandar" just keeps typing.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: &'static [(&'static str, u32)],
    phrase: usize,
    shown: usize,
    phase: Phase,
    type_ms: u32,
    delete_ms: u32,
}

impl Typewriter {
    pub fn new(phrases: &'static [(&'static str, u32)], type_ms: u32, delete_ms: u32) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            type_ms,
            delete_ms,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).map(|(text, _)| *text).unwrap_or("")
    }

    fn next_index(&self) -> usize {
        if self.phrases.is_empty() {
            0
        } else {
            (self.phrase + 1) % self.phrases.len()
        }
    }

    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// Advances one frame and returns how long to wait before the next.
    pub fn step(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return 0;
        }
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                self.type_ms
            }
            Phase::Typing => {
                self.phase = Phase::Holding;
                self.phrases[self.phrase].1
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.step()
            }
            Phase::Deleting => {
                let next = self.phrases[self.next_index()].0;
                let keep = common_prefix_chars(self.current(), next);
                if self.shown > keep {
                    self.shown -= 1;
                    self.delete_ms
                } else {
                    self.phrase = self.next_index();
                    self.phase = Phase::Typing;
                    self.type_ms
                }
            }
        }
    }
}

fn common_prefix_chars(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAMES: &[(&str, u32)] = &[("Ahmad Isshahrul", 1000), ("Ahmad Isshahrul Isskandar", 2000)];

    #[test]
    fn types_first_phrase_then_holds() {
        let mut tw = Typewriter::new(NAMES, 50, 30);
        assert_eq!(tw.text(), "");

        for _ in 0.."Ahmad Isshahrul".len() {
            assert_eq!(tw.step(), 50);
        }
        assert_eq!(tw.text(), "Ahmad Isshahrul");
        assert_eq!(tw.step(), 1000);
    }

    #[test]
    fn erases_only_to_shared_prefix() {
        let mut tw = Typewriter::new(NAMES, 50, 30);
        let mut shortest_after_first = usize::MAX;
        let mut seen_full = false;

        for _ in 0..500 {
            tw.step();
            let text = tw.text();
            if text == "Ahmad Isshahrul Isskandar" {
                seen_full = true;
            }
            if seen_full {
                shortest_after_first = shortest_after_first.min(text.chars().count());
            }
        }

        assert!(seen_full);
        assert_eq!(shortest_after_first, "Ahmad Isshahrul".len());
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut tw = Typewriter::new(&[], 50, 30);
        assert_eq!(tw.step(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn prefix_counts_chars() {
        assert_eq!(common_prefix_chars("héllo", "hélp"), 3);
        assert_eq!(common_prefix_chars("", "abc"), 0);
    }
}
