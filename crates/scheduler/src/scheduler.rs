// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! The core's external surface (§6): `Scheduler::start`/`shutdown`.

use crate::claim;
use crate::dispatch::DispatchContext;
use crate::gc;
use sq_core::{Clock, SchedulerConfig, SchedulerMetrics};
use sq_policy::PolicyService;
use sq_store::{LiveActionStore, SchedulingQueueStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Owns the claim loop (C5) and GC loop (C7) as long-lived background
/// tasks. Constructed with everything the core needs; consumes a
/// [`SchedulerConfig`] rather than reading any ambient/global state (§6).
pub struct Scheduler<C, Q, L, P> {
    ctx: DispatchContext<C, Q, L, P>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl<C, Q, L, P> Scheduler<C, Q, L, P>
where
    C: Clock,
    Q: SchedulingQueueStore + 'static,
    L: LiveActionStore + 'static,
    P: PolicyService + 'static,
{
    pub fn new(
        clock: C,
        queue: Arc<Q>,
        live_actions: Arc<L>,
        policy: Arc<P>,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            ctx: DispatchContext {
                clock,
                queue,
                live_actions,
                policy,
                config,
                metrics: Arc::new(SchedulerMetrics::default()),
            },
            cancel: CancellationToken::new(),
            tasks: Vec::new(),
        }
    }

    /// Read-only handle to the in-process counters (C8).
    pub fn metrics(&self) -> Arc<SchedulerMetrics> {
        Arc::clone(&self.ctx.metrics)
    }

    /// Launch the claim and GC loops. Re-entrant calls are not supported —
    /// call once per `Scheduler` instance (§6: idempotent re-entry is not
    /// required).
    pub fn start(&mut self) {
        info!("starting scheduling queue handler");

        let claim_task = tokio::spawn(claim::run(self.ctx.clone(), self.cancel.clone()));
        let gc_task = tokio::spawn(gc::run(
            self.ctx.clock.clone(),
            Arc::clone(&self.ctx.queue),
            self.ctx.config,
            Arc::clone(&self.ctx.metrics),
            self.cancel.clone(),
        ));

        self.tasks.push(claim_task);
        self.tasks.push(gc_task);
    }

    /// Request cooperative termination and await both loop tasks.
    ///
    /// Loops exit at their next tick boundary rather than being forcibly
    /// interrupted mid-dispatch (§5) — in-flight dispatches are allowed to
    /// run to completion. Awaiting here (rather than only flipping the
    /// token) gives the caller a definite join point before it tears down
    /// the stores the scheduler was borrowing (§6).
    pub async fn shutdown(mut self) {
        info!("shutting down scheduling queue handler");
        self.cancel.cancel();
        for task in self.tasks.drain(..) {
            let _ = task.await;
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
