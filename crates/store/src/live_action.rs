// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! `LiveActionStore`: status reads/updates with publish separated from
//! update (§4.3, §4.6, §9 — "Publish separated from update" is load-bearing).

use async_trait::async_trait;
use parking_lot::Mutex;
use sq_core::{LiveAction, LiveActionId, LiveActionStatus, StoreError};
use std::collections::HashMap;
use tokio::sync::broadcast;

const KIND: &str = "LiveAction";

/// A status-change notification emitted by `publish_status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveActionEvent {
    pub id: LiveActionId,
    pub status: LiveActionStatus,
}

/// Persistent collection of live-action records, as consumed by the core.
#[async_trait]
pub trait LiveActionStore: Send + Sync {
    async fn get_by_id(&self, id: &LiveActionId) -> Result<LiveAction, StoreError>;

    /// Set `live.id`'s status. When `publish=false`, subscribers are not
    /// notified — used for internal bookkeeping writes that must not race
    /// ahead of the later, deliberate `publish_status` call (§4.6).
    async fn update_status(
        &self,
        live: &LiveAction,
        new_status: LiveActionStatus,
        publish: bool,
    ) -> Result<LiveAction, StoreError>;

    /// Emit the current stored status to downstream subscribers.
    async fn publish_status(&self, live: &LiveAction) -> Result<(), StoreError>;
}

/// Reference in-memory implementation of [`LiveActionStore`].
///
/// Subscribers attach via [`subscribe`](Self::subscribe); publishing to a
/// channel with no subscribers is not an error (mirrors a pub/sub bus where
/// a slow or absent consumer doesn't block the publisher).
pub struct InMemoryLiveActionStore {
    records: Mutex<HashMap<LiveActionId, LiveAction>>,
    publisher: broadcast::Sender<LiveActionEvent>,
}

impl InMemoryLiveActionStore {
    pub fn new() -> Self {
        let (publisher, _) = broadcast::channel(1024);
        Self { records: Mutex::new(HashMap::new()), publisher }
    }

    /// Seed a record as the owning execution engine would.
    ///
    /// Not part of `LiveActionStore`: the core only reads and updates
    /// status on records that already exist (§4.3) — creating them belongs
    /// to the action execution engine, out of scope (§1).
    pub fn seed(&self, live: LiveAction) {
        self.records.lock().insert(live.id.clone(), live);
    }

    /// Subscribe to status-change events published via `publish_status`.
    pub fn subscribe(&self) -> broadcast::Receiver<LiveActionEvent> {
        self.publisher.subscribe()
    }
}

impl Default for InMemoryLiveActionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiveActionStore for InMemoryLiveActionStore {
    async fn get_by_id(&self, id: &LiveActionId) -> Result<LiveAction, StoreError> {
        self.records
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(KIND, id.to_string()))
    }

    async fn update_status(
        &self,
        live: &LiveAction,
        new_status: LiveActionStatus,
        publish: bool,
    ) -> Result<LiveAction, StoreError> {
        let updated = {
            let mut records = self.records.lock();
            let record = records
                .get_mut(&live.id)
                .ok_or_else(|| StoreError::not_found(KIND, live.id.to_string()))?;
            record.status = new_status;
            record.clone()
        };

        if publish {
            // A publish error (no receivers) is not a store failure.
            let _ = self.publisher.send(LiveActionEvent {
                id: updated.id.clone(),
                status: updated.status.clone(),
            });
        }

        Ok(updated)
    }

    async fn publish_status(&self, live: &LiveAction) -> Result<(), StoreError> {
        let current = self
            .records
            .lock()
            .get(&live.id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(KIND, live.id.to_string()))?;
        let _ = self.publisher.send(LiveActionEvent { id: current.id, status: current.status });
        Ok(())
    }
}

#[cfg(test)]
#[path = "live_action_tests.rs"]
mod tests;
