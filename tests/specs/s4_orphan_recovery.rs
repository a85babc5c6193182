// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

use crate::common::noop_harness;
use sq_core::{FakeClock, LiveActionId, LiveActionStatus, QueueItemId};
use sq_store::LiveActionStore;
use std::time::Duration;

/// S4: a scheduler claims an item and then "dies" (nothing ever runs
/// dispatch on it). After the handling timeout, one GC tick clears the
/// claim, and a subsequent claim-loop tick dispatches it.
#[tokio::test(flavor = "multi_thread")]
async fn orphaned_claim_is_recovered_by_gc_then_dispatched() {
    let clock = FakeClock::at(1_000);
    let mut harness = noop_harness(clock.clone());
    harness.seed_live_action("L1", LiveActionStatus::Requested);

    // Simulate a scheduler that claimed Q1 and then crashed: handling=true,
    // last_updated_timestamp stale relative to the eventual GC cutoff.
    harness.queue.insert_new(
        sq_core::QueueItem::builder()
            .id(QueueItemId::from_string("Q1"))
            .liveaction_id(LiveActionId::from_string("L1"))
            .scheduled_start_timestamp(clock.now() - 1_000)
            .handling(true)
            .last_updated_timestamp(clock.now())
            .build(),
    );

    harness.start();

    // Orphan horizon: handling_timeout_ms default is 60_000.
    clock.advance_ms(60_001);
    harness.wait_until_drained(400).await;

    assert!(harness.queue.is_empty(), "GC should recover the orphan and the claim loop should dispatch it");
    let live = harness.live_actions.get_by_id(&LiveActionId::from_string("L1")).await.unwrap();
    assert_eq!(live.status, LiveActionStatus::Scheduled);
    assert_eq!(harness.metrics.snapshot().gc_recovered, 1);
    assert_eq!(harness.metrics.snapshot().dispatched, 1);

    tokio::time::sleep(Duration::from_millis(1)).await;
    harness.shutdown().await;
}
