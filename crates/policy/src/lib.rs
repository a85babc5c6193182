// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sq-policy: the pre-run admission policy seam (§4.4).
//!
//! The scheduler core depends only on [`PolicyService`]; this crate supplies
//! the passthrough default and, for tests, a scriptable fake.

pub mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use service::{NoopPolicyService, PolicyService};

#[cfg(any(test, feature = "test-support"))]
pub use fake::ScriptedPolicyService;
