use log::Level;

/// Header switches to its compact style past this vertical offset.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const COUNT_UP_DURATION_MS: f64 = 2000.0;
/// Fraction of a stat item that must be on screen before it starts counting.
pub const COUNT_UP_THRESHOLD: f64 = 0.5;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_SELECTOR: &str = ".fade-in-section";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
