//! Tick timing helpers.

use std::time::Duration;

/// Number of microseconds in one second.
pub const MICROS_PER_SEC: u64 = 1_000_000;

/// Tick period for a given rate in Hz.
/// - Clamps `hz` to at least 1 to avoid division by zero.
/// - The result is at least 1 microsecond.
#[inline]
pub fn tick_period(hz: u32) -> Duration {
    Duration::from_micros((MICROS_PER_SEC / u64::from(hz.max(1))).max(1))
}
