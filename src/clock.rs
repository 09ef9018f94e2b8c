//! Clock abstraction for supplying "now" to time-dependent operations.
//!
//! Commands read the current moment exactly once per logical operation and
//! pass it down, so a single invocation's notion of "now" stays consistent
//! across prayer resolution and formatting. The trait exists so tests can
//! drive those operations with a fixed instant instead of the system clock.

use chrono::{DateTime, Local};

/// Source of the current time.
pub trait Clock {
    /// Get the current time.
    fn now(&self) -> DateTime<Local>;
}

/// Real-time implementation that uses the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant, for tests.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
