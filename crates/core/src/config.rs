// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Scheduler configuration record.
//!
//! Every threshold the scheduler consults is carried here and injected at
//! construction time — nothing is read from environment variables or other
//! process-wide state (see §6/§9 of the design: "Global configuration").

/// If a `QueueItem` hasn't been updated for more than this many
/// milliseconds while `handling=true`, the GC loop considers it orphaned.
pub const DEFAULT_HANDLING_TIMEOUT_MS: i64 = 60_000;

/// How far into the future a policy-delayed item is rescheduled.
pub const DEFAULT_POLICY_DELAYED_RESCHEDULE_MS: i64 = 1_500;

/// Default claim-loop tick interval.
pub const DEFAULT_SLEEP_INTERVAL_MS: u64 = 100;

/// Default GC-loop tick interval.
pub const DEFAULT_GC_INTERVAL_MS: u64 = 10_000;

/// Default bound on concurrent in-flight dispatches.
pub const DEFAULT_POOL_SIZE: usize = 200;

/// Tunable thresholds for the claim loop, dispatch worker, and GC loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Claim-loop tick interval, in milliseconds.
    pub sleep_interval_ms: u64,
    /// GC-loop tick interval, in milliseconds.
    pub gc_interval_ms: u64,
    /// Maximum number of concurrent dispatches.
    pub pool_size: usize,
    /// A claimed item not updated within this many milliseconds is orphaned.
    pub handling_timeout_ms: i64,
    /// How far into the future to reschedule a policy-delayed item.
    pub policy_delayed_reschedule_ms: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            sleep_interval_ms: DEFAULT_SLEEP_INTERVAL_MS,
            gc_interval_ms: DEFAULT_GC_INTERVAL_MS,
            pool_size: DEFAULT_POOL_SIZE,
            handling_timeout_ms: DEFAULT_HANDLING_TIMEOUT_MS,
            policy_delayed_reschedule_ms: DEFAULT_POLICY_DELAYED_RESCHEDULE_MS,
        }
    }
}

impl SchedulerConfig {
    crate::setters! {
        set { sleep_interval_ms: u64 }
        set { gc_interval_ms: u64 }
        set { pool_size: usize }
        set { handling_timeout_ms: i64 }
        set { policy_delayed_reschedule_ms: i64 }
    }
}
