// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Direct tests for the testable properties (§8) that aren't already
//! pinned down by a literal scenario above.

use proptest::prelude::*;
use sq_core::{FakeClock, LiveActionId, QueueItem, QueueItemId};
use sq_store::{InMemorySchedulingQueueStore, SchedulingQueueStore};
use std::sync::Arc;

/// Property 1: mutual exclusion of claim. Fuzz N concurrent
/// `QueryReady`+`AddOrUpdate` pairs against one shared item; exactly one
/// claim (one (item_id, revision) CAS) succeeds.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn claim_is_mutually_exclusive_under_concurrency(claimant_count in 2usize..8) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let clock = FakeClock::at(1_000);
            let queue = Arc::new(InMemorySchedulingQueueStore::new(clock.clone()));
            queue.insert_new(
                QueueItem::builder()
                    .id(QueueItemId::from_string("Q1"))
                    .liveaction_id(LiveActionId::from_string("L1"))
                    .scheduled_start_timestamp(clock.now() - 1_000)
                    .handling(false)
                    .build(),
            );

            let mut handles = Vec::new();
            for _ in 0..claimant_count {
                let queue = Arc::clone(&queue);
                let now = clock.now();
                handles.push(tokio::spawn(async move {
                    match queue.query_ready(now).await {
                        Some(mut item) => {
                            item.handling = true;
                            queue.add_or_update(item).await.is_ok()
                        }
                        None => false,
                    }
                }));
            }

            let mut wins = 0;
            for handle in handles {
                if handle.await.unwrap() {
                    wins += 1;
                }
            }
            prop_assert_eq!(wins, 1, "exactly one claimant must win the CAS race");
            Ok(())
        })?;
    }
}

/// Property 2: FIFO by timestamp for a batch of strictly increasing
/// `scheduled_start_timestamp` values.
#[tokio::test]
async fn query_ready_returns_strictly_increasing_timestamps_in_order() {
    let clock = FakeClock::at(10_000);
    let queue = InMemorySchedulingQueueStore::new(clock.clone());
    let ids = ["Q1", "Q2", "Q3"];
    for (i, id) in ids.iter().enumerate() {
        queue.insert_new(
            QueueItem::builder()
                .id(QueueItemId::from_string(*id))
                .liveaction_id(LiveActionId::from_string(format!("L{i}")))
                .scheduled_start_timestamp(100 * (i as i64 + 1))
                .handling(false)
                .build(),
        );
    }

    let mut observed = Vec::new();
    loop {
        let Some(mut item) = queue.query_ready(clock.now()).await else { break };
        observed.push(item.id.clone());
        item.handling = true;
        queue.add_or_update(item).await.unwrap();
    }

    assert_eq!(
        observed,
        ids.iter().map(|s| QueueItemId::from_string(*s)).collect::<Vec<_>>()
    );
}

/// Property 3: an item not yet due is never returned by `QueryReady`.
#[tokio::test]
async fn query_ready_never_returns_an_item_due_in_the_future() {
    let clock = FakeClock::at(1_000);
    let queue = InMemorySchedulingQueueStore::new(clock.clone());
    queue.insert_new(
        QueueItem::builder()
            .liveaction_id(LiveActionId::from_string("L1"))
            .scheduled_start_timestamp(clock.now() + 1)
            .handling(false)
            .build(),
    );

    assert!(queue.query_ready(clock.now()).await.is_none());
}

/// Property 7: a `NotFound` on `GetByID` must not be accompanied by a
/// published status (covered end-to-end by s6, this pins the store-level
/// half: there is nothing to publish about a record that was never seeded).
#[tokio::test]
async fn get_by_id_on_an_unseeded_record_is_not_found() {
    use sq_store::LiveActionStore;
    let store = sq_store::InMemoryLiveActionStore::new();
    let err = store.get_by_id(&LiveActionId::from_string("ghost")).await.unwrap_err();
    assert!(err.is_not_found());
}
