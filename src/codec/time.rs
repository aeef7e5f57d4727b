//! Wall-clock source for Simpleflake generation

use chrono::Utc;

/// Source of the current instant in milliseconds since the Unix epoch.
///
/// The clock need not be monotonic; a clock that steps backwards simply
/// produces IDs that sort earlier.
pub trait TimeSource {
    fn now_millis(&self) -> i64;
}

/// Reads the system wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
