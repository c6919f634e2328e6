/// Header "scrolled" flag: set while the page is scrolled further than
/// `threshold_px` from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFlag {
    threshold_px: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recomputes the flag for a new vertical offset. Returns true when the
    /// flag flipped.
    pub fn update(&mut self, offset_px: f64) -> bool {
        let scrolled = offset_px > self.threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_on_and_off_around_threshold() {
        let mut flag = ScrollFlag::new(50.0);
        assert!(!flag.update(0.0));
        assert!(!flag.is_scrolled());

        assert!(flag.update(80.0));
        assert!(flag.is_scrolled());

        assert!(flag.update(20.0));
        assert!(!flag.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut flag = ScrollFlag::new(50.0);
        flag.update(50.0);
        assert!(!flag.is_scrolled());
        flag.update(50.5);
        assert!(flag.is_scrolled());
    }

    #[test]
    fn repeated_offsets_report_no_change() {
        let mut flag = ScrollFlag::new(50.0);
        assert!(flag.update(120.0));
        assert!(!flag.update(300.0));
        assert!(!flag.update(51.0));
        assert!(flag.is_scrolled());
    }
}
