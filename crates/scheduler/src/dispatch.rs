// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Dispatch worker (C6): the per-claimed-item state machine in §4.6.

use sq_core::{Clock, LiveActionStatus, QueueItem, SchedulerConfig, SchedulerMetrics};
use sq_policy::PolicyService;
use sq_store::{LiveActionStore, SchedulingQueueStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the dispatch worker needs, bundled so the claim loop can hand
/// one claimed item off to a spawned task without threading five separate
/// `Arc`s through the call site.
pub struct DispatchContext<C, Q, L, P> {
    pub clock: C,
    pub queue: Arc<Q>,
    pub live_actions: Arc<L>,
    pub policy: Arc<P>,
    pub config: SchedulerConfig,
    pub metrics: Arc<SchedulerMetrics>,
}

impl<C, Q, L, P> Clone for DispatchContext<C, Q, L, P>
where
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            queue: Arc::clone(&self.queue),
            live_actions: Arc::clone(&self.live_actions),
            policy: Arc::clone(&self.policy),
            config: self.config,
            metrics: Arc::clone(&self.metrics),
        }
    }
}

/// Run the dispatch state machine (§4.6) for one claimed `item`.
///
/// `item` has already had `handling` flipped to `true` and its claim CAS
/// has already succeeded — this function owns everything that happens
/// after that point.
pub async fn dispatch<C, Q, L, P>(ctx: &DispatchContext<C, Q, L, P>, item: QueueItem)
where
    C: Clock,
    Q: SchedulingQueueStore,
    L: LiveActionStore,
    P: PolicyService,
{
    let start = ctx.clock.now();

    // Step 1: reload the live-action. A NotFound here means the owning
    // record is gone; the queue item is garbage with no retry.
    let live = match ctx.live_actions.get_by_id(&item.liveaction_id).await {
        Ok(live) => live,
        Err(err) if err.is_not_found() => {
            warn!(
                queue_item_id = %item.id,
                liveaction_id = %item.liveaction_id,
                "live action not found, dropping orphaned queue item"
            );
            if let Err(delete_err) = ctx.queue.delete(&item.id).await {
                warn!(queue_item_id = %item.id, error = %delete_err, "failed to delete queue item after not-found live action");
            }
            ctx.metrics.record_dropped_not_found();
            record_elapsed(ctx, start);
            return;
        }
        Err(err) => {
            // Transient: leave handling=true, GC will reclaim.
            warn!(queue_item_id = %item.id, error = %err, "transient error loading live action, leaving item for GC");
            record_elapsed(ctx, start);
            return;
        }
    };

    // Step 2: admission policies may mutate status.
    let live = ctx.policy.apply_pre_run(live).await;

    // Step 3: branch on the (possibly policy-mutated) status.
    if live.status.is_policy_delayed() {
        handle_policy_delay(ctx, item, live).await;
        record_elapsed(ctx, start);
        return;
    }

    if live.status.is_completed_or_cancel() {
        info!(
            queue_item_id = %item.id,
            liveaction_id = %live.id,
            status = %live.status,
            "live action already terminal, dropping queue item"
        );
        if let Err(err) = ctx.queue.delete(&item.id).await {
            warn!(queue_item_id = %item.id, error = %err, "failed to delete queue item for terminal live action");
        }
        ctx.metrics.record_dropped_terminal();
        record_elapsed(ctx, start);
        return;
    }

    // Step 4: runnability guard.
    if !live.status.is_runnable() {
        warn!(
            queue_item_id = %item.id,
            liveaction_id = %live.id,
            status = %live.status,
            "live action in unrecognized, non-runnable status, dropping queue item"
        );
        if let Err(err) = ctx.queue.delete(&item.id).await {
            warn!(queue_item_id = %item.id, error = %err, "failed to delete queue item for non-runnable live action");
        }
        ctx.metrics.record_dropped_not_runnable();
        record_elapsed(ctx, start);
        return;
    }

    // Step 5: transition to scheduled.
    let needs_transition = matches!(
        live.status,
        LiveActionStatus::Requested | LiveActionStatus::Delayed
    );

    let live = if needs_transition {
        match ctx
            .live_actions
            .update_status(&live, LiveActionStatus::Scheduled, false)
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                warn!(queue_item_id = %item.id, error = %err, "failed to update live action to scheduled, leaving item for GC");
                record_elapsed(ctx, start);
                return;
            }
        }
    } else {
        live
    };

    if let Err(err) = ctx.live_actions.publish_status(&live).await {
        warn!(queue_item_id = %item.id, error = %err, "failed to publish scheduled status, leaving item for GC");
        record_elapsed(ctx, start);
        return;
    }

    if let Err(err) = ctx.queue.delete(&item.id).await {
        warn!(queue_item_id = %item.id, error = %err, "failed to delete queue item after publishing scheduled status");
    }

    info!(queue_item_id = %item.id, liveaction_id = %live.id, "dispatched live action to scheduled");
    ctx.metrics.record_dispatched();
    record_elapsed(ctx, start);
}

async fn handle_policy_delay<C, Q, L, P>(
    ctx: &DispatchContext<C, Q, L, P>,
    mut item: QueueItem,
    live: sq_core::LiveAction,
) where
    C: Clock,
    Q: SchedulingQueueStore,
    L: LiveActionStore,
{
    if let Err(err) = ctx
        .live_actions
        .update_status(&live, LiveActionStatus::Delayed, false)
        .await
    {
        warn!(queue_item_id = %item.id, error = %err, "failed to record policy delay on live action, leaving item for GC");
        return;
    }

    let now = ctx.clock.now();
    item.scheduled_start_timestamp = ctx
        .clock
        .shift(now, ctx.config.policy_delayed_reschedule_ms);
    // RF1: reset handling explicitly rather than relying on GC to notice it
    // 60s later — the item is due again in 1.5s, not 60s.
    item.handling = false;

    match ctx.queue.add_or_update(item.clone()).await {
        Ok(_) => {
            info!(
                queue_item_id = %item.id,
                liveaction_id = %live.id,
                new_scheduled_start_timestamp = item.scheduled_start_timestamp,
                "policy delayed, rescheduled"
            );
            ctx.metrics.record_policy_delayed();
        }
        Err(err) if err.is_write_conflict() => {
            warn!(queue_item_id = %item.id, "queue item updated before policy-delay reschedule could land, deferring to GC");
        }
        Err(err) => {
            warn!(queue_item_id = %item.id, error = %err, "failed to write policy-delay reschedule, leaving item for GC");
        }
    }
}

fn record_elapsed<C, Q, L, P>(ctx: &DispatchContext<C, Q, L, P>, start: sq_core::Timestamp)
where
    C: Clock,
{
    let elapsed_ms = ctx.clock.now().saturating_sub(start);
    tracing::debug!(elapsed_ms, "dispatch cycle complete");
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
