// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Shared harness for the end-to-end scenario tests (§8 of the design
//! documents): wires a `Scheduler` over the in-memory reference stores with
//! a fast tick interval and a controllable `FakeClock`.

use std::sync::Arc;
use std::time::Duration;

use sq_core::test_support::live_action;
use sq_core::{
    FakeClock, LiveActionId, LiveActionStatus, QueueItem, QueueItemId, SchedulerConfig,
    SchedulerMetrics,
};
use sq_policy::{NoopPolicyService, PolicyService, ScriptedPolicyService};
use sq_scheduler::Scheduler;
use sq_store::{InMemoryLiveActionStore, InMemorySchedulingQueueStore, LiveActionEvent};
use tokio::sync::broadcast;

pub const FAST_TICK_MS: u64 = 2;

pub type TestQueue = InMemorySchedulingQueueStore<FakeClock>;

pub struct Harness<P> {
    pub clock: FakeClock,
    pub queue: Arc<TestQueue>,
    pub live_actions: Arc<InMemoryLiveActionStore>,
    pub metrics: Arc<SchedulerMetrics>,
    scheduler: Scheduler<FakeClock, TestQueue, InMemoryLiveActionStore, P>,
}

impl<P: PolicyService + 'static> Harness<P> {
    pub fn new(clock: FakeClock, policy: P, config: SchedulerConfig) -> Self {
        let queue = Arc::new(InMemorySchedulingQueueStore::new(clock.clone()));
        let live_actions = Arc::new(InMemoryLiveActionStore::new());
        let scheduler = Scheduler::new(
            clock.clone(),
            Arc::clone(&queue),
            Arc::clone(&live_actions),
            Arc::new(policy),
            config,
        );
        let metrics = scheduler.metrics();
        Self { clock, queue, live_actions, metrics, scheduler }
    }

    pub fn seed_live_action(&self, id: &str, status: LiveActionStatus) {
        self.live_actions.seed(live_action(id, status));
    }

    pub fn insert_item(&self, id: &str, liveaction_id: &str, scheduled_start_timestamp: i64) -> QueueItem {
        self.queue.insert_new(
            QueueItem::builder()
                .id(QueueItemId::from_string(id))
                .liveaction_id(LiveActionId::from_string(liveaction_id))
                .scheduled_start_timestamp(scheduled_start_timestamp)
                .handling(false)
                .build(),
        )
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LiveActionEvent> {
        self.live_actions.subscribe()
    }

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    pub async fn shutdown(self) {
        self.scheduler.shutdown().await;
    }

    /// Poll until `queue` is empty (the item was dispatched or dropped) or
    /// `attempts` ticks have elapsed.
    pub async fn wait_until_drained(&self, attempts: u32) {
        for _ in 0..attempts {
            if self.queue.is_empty() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(FAST_TICK_MS * 3)).await;
        }
    }

    /// Poll until `item_id` is no longer present among the claimed/unclaimed
    /// set, or `attempts` ticks have elapsed.
    pub async fn wait_until_absent(&self, item_id: &QueueItemId, attempts: u32) {
        for _ in 0..attempts {
            let present = self.queue.query_ready(i64::MAX).await.map(|i| &i.id == item_id).unwrap_or(false)
                || self.queue.query_stuck(i64::MAX).await.iter().any(|i| &i.id == item_id);
            if !present {
                return;
            }
            tokio::time::sleep(Duration::from_millis(FAST_TICK_MS * 3)).await;
        }
    }
}

pub fn default_config() -> SchedulerConfig {
    SchedulerConfig::default().sleep_interval_ms(FAST_TICK_MS).gc_interval_ms(FAST_TICK_MS)
}

pub fn noop_harness(clock: FakeClock) -> Harness<NoopPolicyService> {
    Harness::new(clock, NoopPolicyService, default_config())
}

pub fn scripted_harness(clock: FakeClock) -> (Harness<ScriptedPolicyService>, Arc<ScriptedPolicyService>) {
    let policy = Arc::new(ScriptedPolicyService::new());
    let queue = Arc::new(InMemorySchedulingQueueStore::new(clock.clone()));
    let live_actions = Arc::new(InMemoryLiveActionStore::new());
    let scheduler = Scheduler::new(
        clock.clone(),
        Arc::clone(&queue),
        Arc::clone(&live_actions),
        Arc::clone(&policy),
        default_config(),
    );
    let metrics = scheduler.metrics();
    (Harness { clock, queue, live_actions, metrics, scheduler }, policy)
}
