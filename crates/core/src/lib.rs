// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sq-core: shared types for the action execution scheduling queue handler.
//!
//! Defines the `QueueItem` / `LiveAction` data model, the `Clock`
//! abstraction, the status vocabulary, configuration thresholds, the typed
//! store error taxonomy, and in-process metrics. Store and policy traits
//! live in `sq-store` / `sq-policy`; the loops themselves live in
//! `sq-scheduler`.

pub mod macros;

pub mod clock;
pub mod config;
pub mod error;
pub mod ids;
pub mod live_action;
pub mod metrics;
pub mod queue_item;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock, Timestamp};
pub use config::SchedulerConfig;
pub use error::StoreError;
pub use ids::{LiveActionId, QueueItemId};
pub use live_action::LiveAction;
pub use metrics::{MetricsSnapshot, SchedulerMetrics};
pub use queue_item::QueueItem;
pub use status::LiveActionStatus;
