// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Claim loop (C5): §4.5.

use crate::dispatch::{self, DispatchContext};
use sq_core::Clock;
use sq_policy::PolicyService;
use sq_store::{LiveActionStore, SchedulingQueueStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Run the claim loop until `cancel` fires. Each tick sleeps
/// `sleep_interval_ms`, looks for one ready item, and — on a winning
/// claim — spawns dispatch onto the bounded pool without awaiting it.
pub async fn run<C, Q, L, P>(ctx: DispatchContext<C, Q, L, P>, cancel: CancellationToken)
where
    C: Clock,
    Q: SchedulingQueueStore + 'static,
    L: LiveActionStore + 'static,
    P: PolicyService + 'static,
{
    let sleep = Duration::from_millis(ctx.config.sleep_interval_ms);
    let permits = Arc::new(Semaphore::new(ctx.config.pool_size));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("claim loop received shutdown signal");
                return;
            }
            _ = tokio::time::sleep(sleep) => {}
        }

        let Some(mut item) = ctx.queue.query_ready(ctx.clock.now()).await else {
            continue;
        };

        item.handling = true;
        let claimed = match ctx.queue.add_or_update(item).await {
            Ok(claimed) => claimed,
            Err(err) if err.is_write_conflict() => {
                debug!("queue item handled by another scheduler, skipping");
                ctx.metrics.record_claim_lost();
                continue;
            }
            Err(err) => {
                warn!(error = %err, "failed to claim queue item, will retry next tick");
                continue;
            }
        };
        ctx.metrics.record_claim_won();

        let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
            continue;
        };
        let worker_ctx = ctx.clone();
        tokio::spawn(async move {
            let _permit = permit;
            dispatch::dispatch(&worker_ctx, claimed).await;
        });
    }
}

#[cfg(test)]
#[path = "claim_tests.rs"]
mod tests;
