//! Time abstraction traits for gesture timing.
//!
//! The long-press detector never reads a clock directly; it asks a
//! [`TimeSource`], which lets hosts plug in their own event timestamps and lets
//! tests drive time by hand.

use std::time::{Duration, Instant};

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant, saturating at zero.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for Duration {
    const ZERO: Self = Duration::ZERO;

    fn as_millis(&self) -> u64 {
        u64::try_from(Duration::as_millis(self)).unwrap_or(u64::MAX)
    }

    fn from_millis(millis: u64) -> Self {
        Duration::from_millis(millis)
    }
}

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Duration {
        self.saturating_duration_since(earlier)
    }
}

/// Wall-clock time source backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource<Instant> for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
