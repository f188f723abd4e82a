/// Single-open accordion: expanding one entry collapses the others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        let expanded = if self.expanded == Some(index) { None } else { Some(index) };
        Self { expanded }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let a = Accordion::default();
        assert!((0..4).all(|i| !a.is_expanded(i)));
    }

    #[test]
    fn toggle_twice_collapses() {
        let a = Accordion::default().toggle(2);
        assert!(a.is_expanded(2));
        assert_eq!(a.toggle(2), Accordion::default());
    }

    #[test]
    fn opening_another_moves_expansion() {
        let a = Accordion::default().toggle(0).toggle(3);
        assert!(a.is_expanded(3));
        assert!(!a.is_expanded(0));
    }
}
