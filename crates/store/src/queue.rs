// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! `SchedulingQueueStore`: the CAS-guarded persistent collection of
//! `QueueItem`s (§4.2).

use async_trait::async_trait;
use parking_lot::Mutex;
use sq_core::{Clock, QueueItem, QueueItemId, StoreError, Timestamp};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

const KIND: &str = "QueueItem";

/// Persistent collection of queue items with CAS update and ordered query.
///
/// `AddOrUpdate` must not publish events (§4.2) — it is internal
/// bookkeeping, unlike `LiveActionStore::update_status`/`publish_status`.
#[async_trait]
pub trait SchedulingQueueStore: Send + Sync {
    /// The item with the smallest `scheduled_start_timestamp` among those
    /// with `handling=false` and `scheduled_start_timestamp <= now`, tied
    /// by insertion order.
    async fn query_ready(&self, now: Timestamp) -> Option<QueueItem>;

    /// Items with `handling=true` whose `last_updated_timestamp <= cutoff`.
    async fn query_stuck(&self, cutoff: Timestamp) -> Vec<QueueItem>;

    /// Write `item` using optimistic concurrency keyed on `item.revision`.
    /// On success, returns the stored item with its revision advanced and
    /// `last_updated_timestamp` refreshed. On conflict, the store is left
    /// untouched and `StoreError::WriteConflict` is returned.
    async fn add_or_update(&self, item: QueueItem) -> Result<QueueItem, StoreError>;

    /// Remove the item. Idempotent: deleting an already-absent item is not
    /// an error, since concurrent dispatch/GC paths may race to delete.
    async fn delete(&self, id: &QueueItemId) -> Result<(), StoreError>;
}

struct Entry {
    item: QueueItem,
    /// Assigned once, at first insertion; breaks `QueryReady` ties by
    /// insertion order even though timestamps alone might tie.
    seq: u64,
}

/// Reference in-memory implementation of [`SchedulingQueueStore`].
///
/// Models the CAS contract with an explicit `u64` revision behind a mutex,
/// so the guarantees in §4.2 are directly observable in tests without a
/// real database (see SPEC_FULL.md Design Notes on optimistic concurrency).
pub struct InMemorySchedulingQueueStore<C: Clock> {
    clock: C,
    items: Mutex<HashMap<QueueItemId, Entry>>,
    next_seq: AtomicU64,
}

impl<C: Clock> InMemorySchedulingQueueStore<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, items: Mutex::new(HashMap::new()), next_seq: AtomicU64::new(0) }
    }

    /// Seed the store with an item as an external enqueuer would.
    ///
    /// Not part of `SchedulingQueueStore`: producing queue items is out of
    /// this core's scope (§1). Exposed on the concrete store so tests (and
    /// an embedding process that does own an enqueuer) have somewhere to
    /// hang insertion.
    pub fn insert_new(&self, mut item: QueueItem) -> QueueItem {
        item.last_updated_timestamp = self.clock.now();
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let stored = item.clone();
        self.items.lock().insert(item.id.clone(), Entry { item, seq });
        stored
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C: Clock> SchedulingQueueStore for InMemorySchedulingQueueStore<C> {
    async fn query_ready(&self, now: Timestamp) -> Option<QueueItem> {
        let items = self.items.lock();
        items
            .values()
            .filter(|e| e.item.is_ready(now))
            .min_by_key(|e| (e.item.scheduled_start_timestamp, e.seq))
            .map(|e| e.item.clone())
    }

    async fn query_stuck(&self, cutoff: Timestamp) -> Vec<QueueItem> {
        let items = self.items.lock();
        items.values().filter(|e| e.item.is_stuck(cutoff)).map(|e| e.item.clone()).collect()
    }

    async fn add_or_update(&self, item: QueueItem) -> Result<QueueItem, StoreError> {
        let mut items = self.items.lock();
        match items.get(&item.id) {
            Some(entry) if entry.item.revision != item.revision => {
                Err(StoreError::write_conflict(KIND, item.id.to_string()))
            }
            Some(entry) => {
                let seq = entry.seq;
                let mut next = item;
                next.revision += 1;
                next.last_updated_timestamp = self.clock.now();
                let stored = next.clone();
                items.insert(stored.id.clone(), Entry { item: next, seq });
                Ok(stored)
            }
            None if item.revision == 0 => {
                let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
                let mut next = item;
                next.last_updated_timestamp = self.clock.now();
                let stored = next.clone();
                items.insert(stored.id.clone(), Entry { item: next, seq });
                Ok(stored)
            }
            None => Err(StoreError::write_conflict(KIND, item.id.to_string())),
        }
    }

    async fn delete(&self, id: &QueueItemId) -> Result<(), StoreError> {
        self.items.lock().remove(id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
