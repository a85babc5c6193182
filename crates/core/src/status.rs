// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! The LiveAction status vocabulary and the three subsets the scheduler
//! pattern-matches on: runnable, policy-delayed, and terminal-or-cancel.

/// Status of a `LiveAction`, as observed by the scheduler.
///
/// The set is closed at its known members but carries a catch-all `Other`
/// variant: an upstream system may introduce a new status value, and the
/// scheduler's contract for anything it doesn't recognize is "not runnable,
/// drop with a warning" rather than a silent match-all default that could
/// misclassify it as runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveActionStatus {
    Requested,
    Scheduled,
    Delayed,
    PolicyDelayed,
    Canceling,
    Canceled,
    Succeeded,
    Failed,
    Timeout,
    Abandoned,
    Expired,
    Running,
    Other(String),
}

impl serde::Serialize for LiveActionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            LiveActionStatus::Other(s) => serializer.serialize_str(s),
            known => serializer.serialize_str(&known.to_string()),
        }
    }
}

impl<'de> serde::Deserialize<'de> for LiveActionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(LiveActionStatus::from(s.as_str()))
    }
}

impl From<&str> for LiveActionStatus {
    fn from(s: &str) -> Self {
        match s {
            "requested" => LiveActionStatus::Requested,
            "scheduled" => LiveActionStatus::Scheduled,
            "delayed" => LiveActionStatus::Delayed,
            "policy_delayed" => LiveActionStatus::PolicyDelayed,
            "canceling" => LiveActionStatus::Canceling,
            "canceled" => LiveActionStatus::Canceled,
            "succeeded" => LiveActionStatus::Succeeded,
            "failed" => LiveActionStatus::Failed,
            "timeout" => LiveActionStatus::Timeout,
            "abandoned" => LiveActionStatus::Abandoned,
            "expired" => LiveActionStatus::Expired,
            "running" => LiveActionStatus::Running,
            other => LiveActionStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for LiveActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LiveActionStatus::Requested => "requested",
            LiveActionStatus::Scheduled => "scheduled",
            LiveActionStatus::Delayed => "delayed",
            LiveActionStatus::PolicyDelayed => "policy_delayed",
            LiveActionStatus::Canceling => "canceling",
            LiveActionStatus::Canceled => "canceled",
            LiveActionStatus::Succeeded => "succeeded",
            LiveActionStatus::Failed => "failed",
            LiveActionStatus::Timeout => "timeout",
            LiveActionStatus::Abandoned => "abandoned",
            LiveActionStatus::Expired => "expired",
            LiveActionStatus::Running => "running",
            LiveActionStatus::Other(s) => s,
        })
    }
}

impl LiveActionStatus {
    /// Statuses the claim/dispatch path is willing to schedule.
    pub const RUNNABLE: [LiveActionStatus; 3] =
        [LiveActionStatus::Requested, LiveActionStatus::Scheduled, LiveActionStatus::Delayed];

    /// Terminal outcomes; no further scheduling is possible.
    pub const COMPLETED: [LiveActionStatus; 5] = [
        LiveActionStatus::Succeeded,
        LiveActionStatus::Failed,
        LiveActionStatus::Timeout,
        LiveActionStatus::Abandoned,
        LiveActionStatus::Expired,
    ];

    /// Cancellation in progress or complete.
    pub const CANCEL: [LiveActionStatus; 2] =
        [LiveActionStatus::Canceling, LiveActionStatus::Canceled];

    pub fn is_runnable(&self) -> bool {
        Self::RUNNABLE.contains(self)
    }

    pub fn is_completed_or_cancel(&self) -> bool {
        Self::COMPLETED.contains(self) || Self::CANCEL.contains(self)
    }

    pub fn is_policy_delayed(&self) -> bool {
        matches!(self, LiveActionStatus::PolicyDelayed)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
