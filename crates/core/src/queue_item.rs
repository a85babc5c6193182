// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! The `QueueItem`: a scheduler-owned pointer to a `LiveAction` awaiting
//! dispatch, carrying eligibility time, the claim flag, and the revision
//! token that makes claims compare-and-swap safe.

use crate::clock::Timestamp;
use crate::ids::{LiveActionId, QueueItemId};
use serde::{Deserialize, Serialize};

/// A pending action execution sitting in the scheduling queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: QueueItemId,
    pub liveaction_id: LiveActionId,
    pub scheduled_start_timestamp: Timestamp,
    pub handling: bool,
    pub original_start_timestamp: Timestamp,
    pub action_execution_id: String,
    pub delay: Option<i64>,
    /// Epoch-ms of the last successful `AddOrUpdate` write to this item.
    /// Maintained by the store, not the caller — see REDESIGN FLAG RF2.
    pub last_updated_timestamp: Timestamp,
    /// Optimistic-concurrency revision token. Advances on every successful
    /// `AddOrUpdate`; a write carrying a stale revision fails with
    /// `StoreError::WriteConflict` and leaves the stored item untouched.
    pub revision: u64,
}

impl QueueItem {
    /// Construct a fresh item as an external enqueuer would (revision 0,
    /// not yet claimed). Producing `QueueItem`s is out of this core's
    /// scope; this constructor exists so stores and tests have one place
    /// that builds the initial, well-formed shape.
    pub fn new(
        liveaction_id: LiveActionId,
        scheduled_start_timestamp: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: QueueItemId::new(),
            liveaction_id,
            scheduled_start_timestamp,
            handling: false,
            original_start_timestamp: scheduled_start_timestamp,
            action_execution_id: String::new(),
            delay: None,
            last_updated_timestamp: created_at,
            revision: 0,
        }
    }

    /// True if this item is ready for `QueryReady` at the given time.
    pub fn is_ready(&self, now: Timestamp) -> bool {
        !self.handling && self.scheduled_start_timestamp <= now
    }

    /// True if this item is orphaned relative to `cutoff` (see RF2: the
    /// comparator is `last_updated_timestamp`, not `scheduled_start_timestamp`).
    pub fn is_stuck(&self, cutoff: Timestamp) -> bool {
        self.handling && self.last_updated_timestamp <= cutoff
    }
}

#[cfg(test)]
#[path = "queue_item_tests.rs"]
mod tests;
