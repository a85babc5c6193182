// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Opaque, server-assigned identifiers for the two persistent record types.

crate::define_id! {
    /// Unique identifier for a `QueueItem`.
    pub struct QueueItemId("qi-");
}

crate::define_id! {
    /// Unique identifier for a `LiveAction`.
    pub struct LiveActionId("la-");
}
