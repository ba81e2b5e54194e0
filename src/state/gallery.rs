/// Cursor over a fixed image list that wraps at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation controls only make sense with more than one image.
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn jump_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// "2 / 3" style position label.
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} / {}", self.index + 1, self.len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_images_cycle() {
        let start = GalleryCursor::new(3);

        let after = start.next().next().next();
        assert_eq!(after.index(), 0);

        assert_eq!(start.previous().index(), 2);
    }

    #[test]
    fn n_nexts_return_to_origin_from_any_index() {
        for len in 1..8 {
            for origin in 0..len {
                let start = GalleryCursor::new(len).jump_to(origin);
                let mut cursor = start;
                for _ in 0..len {
                    cursor = cursor.next();
                }
                assert_eq!(cursor, start);
                assert_eq!(start.next().previous(), start);
            }
        }
    }

    #[test]
    fn empty_gallery_is_inert() {
        let cursor = GalleryCursor::new(0);
        assert_eq!(cursor.next(), cursor);
        assert_eq!(cursor.previous(), cursor);
        assert!(!cursor.can_navigate());
        assert_eq!(cursor.current::<&str>(&[]), None);
        assert_eq!(cursor.position_label(), "");
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let cursor = GalleryCursor::new(2).jump_to(5);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.jump_to(1).position_label(), "2 / 2");
    }
}
