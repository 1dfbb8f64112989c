//! Monotonic time sources used to time the loop.

use std::time::Instant;

/// A monotonic source of nanosecond timestamps.
///
/// Timestamps are only meaningful relative to each other: the loop uses them exclusively as
/// `now() - start`. Implementations must never go backwards within a process run.
pub trait Clock {
    /// Current timestamp in nanoseconds.
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// [`Clock`] backed by [`Instant`], reporting nanoseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        // Truncation only matters after ~584 years of uptime.
        self.anchor.elapsed().as_nanos() as u64
    }
}
