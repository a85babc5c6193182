// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! In-process scheduler counters.
//!
//! Mirrors the source's `@metrics.CounterWithTimer(key='scheduler.handle_execution')`
//! decorator: every dispatch is counted and timed, but purely in-process —
//! there is no network-exported metrics surface here (that would be a
//! transport concern, out of this core's scope).

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of scheduler counters at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub claims_won: u64,
    pub claims_lost: u64,
    pub dispatched: u64,
    pub policy_delayed: u64,
    pub dropped_not_found: u64,
    pub dropped_terminal: u64,
    pub dropped_not_runnable: u64,
    pub gc_recovered: u64,
}

/// Thread-safe counters updated by the claim loop, dispatch worker, and GC loop.
#[derive(Debug, Default)]
pub struct SchedulerMetrics {
    claims_won: AtomicU64,
    claims_lost: AtomicU64,
    dispatched: AtomicU64,
    policy_delayed: AtomicU64,
    dropped_not_found: AtomicU64,
    dropped_terminal: AtomicU64,
    dropped_not_runnable: AtomicU64,
    gc_recovered: AtomicU64,
}

macro_rules! counter_method {
    ($incr:ident, $field:ident) => {
        pub fn $incr(&self) {
            self.$field.fetch_add(1, Ordering::Relaxed);
        }
    };
}

impl SchedulerMetrics {
    counter_method!(record_claim_won, claims_won);
    counter_method!(record_claim_lost, claims_lost);
    counter_method!(record_dispatched, dispatched);
    counter_method!(record_policy_delayed, policy_delayed);
    counter_method!(record_dropped_not_found, dropped_not_found);
    counter_method!(record_dropped_terminal, dropped_terminal);
    counter_method!(record_dropped_not_runnable, dropped_not_runnable);
    counter_method!(record_gc_recovered, gc_recovered);

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            claims_won: self.claims_won.load(Ordering::Relaxed),
            claims_lost: self.claims_lost.load(Ordering::Relaxed),
            dispatched: self.dispatched.load(Ordering::Relaxed),
            policy_delayed: self.policy_delayed.load(Ordering::Relaxed),
            dropped_not_found: self.dropped_not_found.load(Ordering::Relaxed),
            dropped_terminal: self.dropped_terminal.load(Ordering::Relaxed),
            dropped_not_runnable: self.dropped_not_runnable.load(Ordering::Relaxed),
            gc_recovered: self.gc_recovered.load(Ordering::Relaxed),
        }
    }
}
