// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Clock abstraction for testable time handling.
//!
//! Timestamps are wall-clock epoch milliseconds rather than a monotonic
//! `Instant`: a `QueueItem`'s `scheduled_start_timestamp` is compared and
//! written across store round-trips (and, in a real deployment, across
//! process restarts), so it needs to be an ordinary comparable, shiftable
//! value rather than a process-local monotonic handle.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// A UTC instant with millisecond resolution, expressed as epoch milliseconds.
pub type Timestamp = i64;

/// A clock that provides the current time and millisecond arithmetic over it.
pub trait Clock: Clone + Send + Sync + 'static {
    /// The current time.
    fn now(&self) -> Timestamp;

    /// `instant` shifted by `delta_ms` (positive moves into the future).
    fn shift(&self, instant: Timestamp, delta_ms: i64) -> Timestamp {
        instant.saturating_add(delta_ms)
    }
}

/// Real system clock, backed by `SystemTime`.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Fake clock for testing with controllable, explicitly-advanced time.
///
/// Starts at an arbitrary fixed epoch so tests don't depend on wall-clock
/// time at the moment they run.
#[derive(Clone)]
pub struct FakeClock {
    now_ms: Arc<AtomicI64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { now_ms: Arc::new(AtomicI64::new(1_700_000_000_000)) }
    }

    /// Construct a fake clock starting at a specific epoch-millisecond value.
    pub fn at(now_ms: Timestamp) -> Self {
        Self { now_ms: Arc::new(AtomicI64::new(now_ms)) }
    }

    /// Advance the clock by `delta_ms` (must be non-negative).
    pub fn advance_ms(&self, delta_ms: i64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Set the clock to an explicit epoch-millisecond value.
    pub fn set_ms(&self, now_ms: Timestamp) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        self.now_ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
