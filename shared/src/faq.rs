/// FAQ accordion: at most one item open across the whole set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Click on item `item`: an open item closes with nothing replacing it,
    /// a closed item opens exclusively.
    pub fn toggle(&mut self, item: usize) -> Option<usize> {
        self.open = if self.open == Some(item) {
            None
        } else {
            Some(item)
        };
        self.open
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::FaqAccordion;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        let mut faq = FaqAccordion::default();
        assert_eq!(faq.toggle(0), Some(0));
        assert_eq!(faq.toggle(2), Some(2));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn clicking_the_open_item_closes_everything() {
        let mut faq = FaqAccordion::default();
        faq.toggle(1);
        assert_eq!(faq.toggle(1), None);
        assert_eq!(faq.open(), None);
    }

    #[test]
    fn at_most_one_item_is_ever_open() {
        let mut faq = FaqAccordion::default();
        for item in [0usize, 3, 3, 1, 0, 0, 2] {
            faq.toggle(item);
            let open_count = (0..4).filter(|i| faq.is_open(*i)).count();
            assert!(open_count <= 1, "{open_count} items open after toggling {item}");
        }
    }
}
