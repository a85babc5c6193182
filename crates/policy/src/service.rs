// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Pre-run admission policy (§4.4).
//!
//! `apply_pre_run` is the one seam where a `LiveAction` can be mutated out
//! from under the dispatch worker mid-flight: a policy may force
//! `policy_delayed` (reschedule), leave a terminal/cancel status alone
//! (drop), or pass a runnable action through unchanged.

use async_trait::async_trait;
use sq_core::LiveAction;

/// Applies pre-run policies defined for an action, possibly mutating its
/// status. The dispatch worker only interprets the four status subsets
/// documented in §4.4; anything a policy does beyond setting `status` is
/// opaque to the scheduler.
#[async_trait]
pub trait PolicyService: Send + Sync {
    async fn apply_pre_run(&self, live: LiveAction) -> LiveAction;
}

/// A policy service that never mutates status — every action passes
/// through as-is. The natural default when no admission policies apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPolicyService;

#[async_trait]
impl PolicyService for NoopPolicyService {
    async fn apply_pre_run(&self, live: LiveAction) -> LiveAction {
        live
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
