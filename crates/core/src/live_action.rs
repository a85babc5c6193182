// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! The `LiveAction`: a record of one intended action execution, owned by
//! the surrounding automation platform. The scheduler only reads and
//! updates `status`; `payload` is opaque passthrough.

use crate::ids::LiveActionId;
use crate::status::LiveActionStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveAction {
    pub id: LiveActionId,
    pub status: LiveActionStatus,
    /// Opaque payload owned by the execution engine (parameters, context,
    /// result). The scheduler never inspects it.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl LiveAction {
    pub fn new(id: LiveActionId, status: LiveActionStatus) -> Self {
        Self { id, status, payload: serde_json::Value::Null }
    }
}
