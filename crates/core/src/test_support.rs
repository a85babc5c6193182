// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Test builders, gated behind `test-support` so downstream crates' tests
//! can construct fixtures without duplicating this boilerplate.

use crate::clock::Timestamp;
use crate::ids::{LiveActionId, QueueItemId};
use crate::live_action::LiveAction;
use crate::queue_item::QueueItem;
use crate::status::LiveActionStatus;

/// Builder for a `QueueItem` fixture, defaulting to an unclaimed item that
/// is already due.
pub struct QueueItemBuilder {
    id: QueueItemId,
    liveaction_id: LiveActionId,
    scheduled_start_timestamp: Timestamp,
    handling: bool,
    last_updated_timestamp: Timestamp,
    revision: u64,
}

impl Default for QueueItemBuilder {
    fn default() -> Self {
        Self {
            id: QueueItemId::new(),
            liveaction_id: LiveActionId::new(),
            scheduled_start_timestamp: 0,
            handling: false,
            last_updated_timestamp: 0,
            revision: 0,
        }
    }
}

impl QueueItemBuilder {
    pub fn id(mut self, id: QueueItemId) -> Self {
        self.id = id;
        self
    }

    pub fn liveaction_id(mut self, id: LiveActionId) -> Self {
        self.liveaction_id = id;
        self
    }

    pub fn scheduled_start_timestamp(mut self, ts: Timestamp) -> Self {
        self.scheduled_start_timestamp = ts;
        self
    }

    pub fn handling(mut self, handling: bool) -> Self {
        self.handling = handling;
        self
    }

    pub fn last_updated_timestamp(mut self, ts: Timestamp) -> Self {
        self.last_updated_timestamp = ts;
        self
    }

    pub fn revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    pub fn build(self) -> QueueItem {
        QueueItem {
            id: self.id,
            liveaction_id: self.liveaction_id,
            scheduled_start_timestamp: self.scheduled_start_timestamp,
            handling: self.handling,
            original_start_timestamp: self.scheduled_start_timestamp,
            action_execution_id: String::new(),
            delay: None,
            last_updated_timestamp: self.last_updated_timestamp,
            revision: self.revision,
        }
    }
}

impl QueueItem {
    /// Construct a builder with test defaults (unclaimed, due at `0`).
    pub fn builder() -> QueueItemBuilder {
        QueueItemBuilder::default()
    }
}

/// Convenience constructor for a `LiveAction` fixture with a given status.
pub fn live_action(id: &str, status: LiveActionStatus) -> LiveAction {
    LiveAction::new(LiveActionId::from_string(id), status)
}
