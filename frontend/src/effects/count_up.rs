use crate::config;

/// Where a counter is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Waiting for the region to become visible.
    Watching,
    Running { started_at: f64 },
    Finished,
    /// Torn down before finishing. Nothing moves after this.
    Cancelled,
}

/// Result of advancing the counter by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Value changed, another frame is wanted.
    Running(u32),
    /// Final value reached, stop requesting frames.
    Finished(u32),
    /// Not running, nothing to display.
    Idle,
}

/// Counts from 0 up to `target` over `duration_ms`, once, after the region
/// it belongs to first becomes visible.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    threshold: f64,
    phase: Phase,
    value: u32,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self::with_duration(target, config::COUNT_UP_DURATION_MS)
    }

    pub fn with_duration(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            threshold: config::COUNT_UP_THRESHOLD,
            phase: Phase::Watching,
            value: 0,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_watching(&self) -> bool {
        self.phase == Phase::Watching
    }

    /// Feeds one visibility observation. Returns true only for the
    /// observation that starts the animation.
    pub fn observe(&mut self, visible_ratio: f64, now: f64) -> bool {
        if self.phase != Phase::Watching || visible_ratio < self.threshold {
            return false;
        }
        self.phase = Phase::Running { started_at: now };
        true
    }

    pub fn frame(&mut self, now: f64) -> Frame {
        let started_at = match self.phase {
            Phase::Running { started_at } => started_at,
            _ => return Frame::Idle,
        };

        let progress = progress(now - started_at, self.duration_ms);
        self.value = (progress * f64::from(self.target)).floor() as u32;

        if progress < 1.0 {
            Frame::Running(self.value)
        } else {
            self.phase = Phase::Finished;
            Frame::Finished(self.value)
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Watching | Phase::Running { .. }) {
            self.phase = Phase::Cancelled;
        }
    }
}

/// Elapsed time as a fraction of `duration_ms`, clamped to [0, 1].
/// A non-positive duration counts as already complete.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}
