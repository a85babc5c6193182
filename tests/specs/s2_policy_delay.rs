// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

use crate::common::scripted_harness;
use sq_core::{FakeClock, LiveActionId, LiveActionStatus, QueueItemId};
use sq_store::LiveActionStore;

/// S2: a policy forcing `policy_delayed` causes the live action to land in
/// `delayed`, the queue item to survive with a ~1500ms-later eligibility
/// time, and `handling` to be cleared.
#[tokio::test(flavor = "multi_thread")]
async fn policy_delay_reschedules_forward_with_handling_cleared() {
    let clock = FakeClock::at(1_000);
    let (mut harness, policy) = scripted_harness(clock.clone());
    policy.force(LiveActionId::from_string("L1"), LiveActionStatus::PolicyDelayed);
    harness.seed_live_action("L1", LiveActionStatus::Requested);
    let t = clock.now();
    harness.insert_item("Q1", "L1", t - 1_000);

    harness.start();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let live = harness.live_actions.get_by_id(&LiveActionId::from_string("L1")).await.unwrap();
    assert_eq!(live.status, LiveActionStatus::Delayed);

    let rescheduled = harness
        .queue
        .query_ready(t + 1_500)
        .await
        .expect("Q1 must still exist, rescheduled into the future");
    assert_eq!(rescheduled.id, QueueItemId::from_string("Q1"));
    assert!(!rescheduled.handling);
    assert!(rescheduled.scheduled_start_timestamp >= t + 1_500);
    assert_eq!(harness.metrics.snapshot().policy_delayed, 1);

    harness.shutdown().await;
}
