// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Test-only scripted policy, grounded on the adapters crate's
//! `FakeNotifyAdapter` (trait + real impl + recording fake) pattern.

use crate::service::PolicyService;
use async_trait::async_trait;
use parking_lot::Mutex;
use sq_core::{LiveAction, LiveActionId, LiveActionStatus};
use std::collections::HashMap;

/// A [`PolicyService`] whose decisions are scripted by the test. Each call
/// to [`force`](Self::force) installs a one-shot override consumed by the
/// next `apply_pre_run` for that id; actions with no override pass through
/// unchanged, same as [`NoopPolicyService`](crate::NoopPolicyService).
#[derive(Default)]
pub struct ScriptedPolicyService {
    overrides: Mutex<HashMap<LiveActionId, LiveActionStatus>>,
    calls: Mutex<Vec<LiveActionId>>,
}

impl ScriptedPolicyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next `apply_pre_run` for `id` to produce `status`.
    pub fn force(&self, id: LiveActionId, status: LiveActionStatus) {
        self.overrides.lock().insert(id, status);
    }

    /// Ids passed to `apply_pre_run`, in call order.
    pub fn calls(&self) -> Vec<LiveActionId> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PolicyService for ScriptedPolicyService {
    async fn apply_pre_run(&self, mut live: LiveAction) -> LiveAction {
        self.calls.lock().push(live.id.clone());
        if let Some(status) = self.overrides.lock().remove(&live.id) {
            live.status = status;
        }
        live
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
