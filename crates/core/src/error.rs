// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Typed error taxonomy for the two store boundaries (§7).
//!
//! Distinguishing `WriteConflict` / `NotFound` / `Transient` by type, rather
//! than by inspecting an exception's class or a status string, is what lets
//! the dispatch worker and claim loop each react correctly without
//! string-matching error messages (REDESIGN FLAG RF3).

use thiserror::Error;

/// Errors surfaced by `SchedulingQueueStore` and `LiveActionStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Optimistic-concurrency loss: the caller's revision token was stale.
    /// The store is left untouched.
    #[error("write conflict on {kind} {id}: stale revision")]
    WriteConflict { kind: &'static str, id: String },

    /// The referenced record does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// Backend unavailable, timed out, or otherwise transiently failed.
    /// Treated the same as a `PolicyError` with respect to the queue item:
    /// the item is left `handling=true` for GC to reclaim.
    #[error("transient store error: {0}")]
    Transient(String),
}

impl StoreError {
    pub fn write_conflict(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::WriteConflict { kind, id: id.into() }
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound { kind, id: id.into() }
    }

    pub fn is_write_conflict(&self) -> bool {
        matches!(self, StoreError::WriteConflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
