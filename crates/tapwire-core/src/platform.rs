//! Platform abstraction for time.
//!
//! Only tap timeouts need a clock; hosts running under test or replaying
//! recorded input supply their own.

use web_time::Instant;

/// Provides timing information for gesture detection.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by `web_time`, which works on native and wasm targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
