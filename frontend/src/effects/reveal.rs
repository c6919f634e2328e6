use crate::config;

/// Reveal state of every region watched by one shared observer.
///
/// Revealed regions are kept in the watch list: the observer stays
/// subscribed to them until the whole effect is torn down.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    revealed: Vec<bool>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(config::REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: Vec::new(),
        }
    }

    /// Adds a region and returns its index.
    pub fn watch(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    pub fn watched(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, region: usize) -> bool {
        self.revealed.get(region).copied().unwrap_or(false)
    }

    /// Feeds one intersection for `region`. Returns true the first time the
    /// region crosses the threshold, which is when its `visible` class
    /// should be added.
    pub fn notify(&mut self, region: usize, visible_ratio: f64) -> bool {
        let Some(revealed) = self.revealed.get_mut(region) else {
            return false;
        };
        if *revealed || visible_ratio < self.threshold {
            return false;
        }
        *revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_past_threshold() {
        let mut tracker = RevealTracker::new(0.1);
        let about = tracker.watch();
        assert!(!tracker.notify(about, 0.05));
        assert!(!tracker.is_revealed(about));
        assert!(tracker.notify(about, 0.1));
        assert!(tracker.is_revealed(about));
        assert!(!tracker.notify(about, 0.9));
    }

    #[test]
    fn regions_are_independent() {
        let mut tracker = RevealTracker::default();
        let about = tracker.watch();
        let stats = tracker.watch();
        assert!(tracker.notify(stats, 1.0));
        assert!(!tracker.is_revealed(about));
        assert!(tracker.notify(about, 0.3));
    }

    #[test]
    fn revealed_regions_stay_watched() {
        let mut tracker = RevealTracker::default();
        let about = tracker.watch();
        tracker.watch();
        tracker.notify(about, 1.0);
        tracker.notify(about, 0.0);
        assert_eq!(tracker.watched(), 2);
        assert!(tracker.is_revealed(about));
    }

    #[test]
    fn unknown_region_is_ignored() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.notify(3, 1.0));
        assert!(!tracker.is_revealed(3));
    }
}
