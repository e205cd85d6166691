//! Shared test infrastructure for colorizer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use colorizer::{Hex, Rgb, TimeDuration, TimeInstant, TimeSource, normalize_hex};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Canonical hex from test literal
pub fn hex(text: &str) -> Hex {
    normalize_hex(text).unwrap()
}

/// Largest per-channel difference between two colors
pub fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.red
        .abs_diff(b.red)
        .max(a.green.abs_diff(b.green))
        .max(a.blue.abs_diff(b.blue))
}

/// Every channel value from 0 to 255 in steps of 17, plus a few awkward ones
pub fn sample_channels() -> Vec<u8> {
    let mut channels: Vec<u8> = (0..=255).step_by(17).collect();
    channels.extend([1, 2, 127, 128, 254]);
    channels
}
