// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

use crate::common::noop_harness;
use sq_core::{FakeClock, LiveActionId, LiveActionStatus};
use sq_store::LiveActionStore;

/// S1: a due, requested item transitions to scheduled, the transition is
/// published exactly once, and the queue item is deleted.
#[tokio::test(flavor = "multi_thread")]
async fn happy_path_schedules_and_publishes_exactly_once_then_deletes() {
    let clock = FakeClock::at(1_000);
    let mut harness = noop_harness(clock.clone());
    harness.seed_live_action("L1", LiveActionStatus::Requested);
    harness.insert_item("Q1", "L1", clock.now() - 1_000);
    let mut events = harness.subscribe();

    harness.start();
    harness.wait_until_drained(200).await;

    assert!(harness.queue.is_empty());
    let live = harness.live_actions.get_by_id(&LiveActionId::from_string("L1")).await.unwrap();
    assert_eq!(live.status, LiveActionStatus::Scheduled);

    let mut scheduled_events = 0;
    while let Ok(event) = events.try_recv() {
        assert_eq!(event.status, LiveActionStatus::Scheduled);
        scheduled_events += 1;
    }
    assert_eq!(scheduled_events, 1, "scheduled status must be published exactly once");
    assert_eq!(harness.metrics.snapshot().dispatched, 1);

    harness.shutdown().await;
}
