// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! GC loop (C7): §4.7. Recovers items orphaned by a scheduler process that
//! claimed them and then died before dispatch completed.

use sq_core::{Clock, SchedulerConfig, SchedulerMetrics};
use sq_store::SchedulingQueueStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub async fn run<C, Q>(
    clock: C,
    queue: Arc<Q>,
    config: SchedulerConfig,
    metrics: Arc<SchedulerMetrics>,
    cancel: CancellationToken,
) where
    C: Clock,
    Q: SchedulingQueueStore,
{
    let sleep = Duration::from_millis(config.gc_interval_ms);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("gc loop received shutdown signal");
                return;
            }
            _ = tokio::time::sleep(sleep) => {}
        }

        let cutoff = clock.shift(clock.now(), -config.handling_timeout_ms);
        let stuck = queue.query_stuck(cutoff).await;

        for mut item in stuck {
            item.handling = false;
            match queue.add_or_update(item.clone()).await {
                Ok(_) => {
                    info!(queue_item_id = %item.id, "removing lock for orphaned item");
                    metrics.record_gc_recovered();
                }
                Err(err) if err.is_write_conflict() => {
                    warn!(queue_item_id = %item.id, "updated before rescheduling");
                }
                Err(err) => {
                    warn!(queue_item_id = %item.id, error = %err, "failed to clear orphaned claim");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "gc_tests.rs"]
mod tests;
