// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sq-scheduler: the action execution scheduling queue handler.
//!
//! Wires the clock, store, and policy seams (`sq-core`, `sq-store`,
//! `sq-policy`) into the claim loop (C5), dispatch worker (C6), and GC
//! loop (C7) described by the surrounding workspace's design documents.

mod claim;
mod dispatch;
mod gc;
mod scheduler;

pub use dispatch::DispatchContext;
pub use scheduler::Scheduler;
