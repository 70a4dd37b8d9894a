use chrono::{Local, Timelike};

/// Source of the local hour of day consumed by the behavior predictor.
///
/// Injected rather than read from a global so prediction stays a
/// deterministic function of its inputs under test.
pub trait Clock: Send + Sync {
    /// Local hour of day, 0-23.
    fn hour(&self) -> u32;
}

/// Wall-clock implementation used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock pinned to a single hour, for tests and replay tooling.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
