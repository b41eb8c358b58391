//! Data model for sweep runs and their outcomes

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal status of one stop attempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Failed,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Success => "success",
            OutcomeStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resource acted upon during a sweep.
///
/// Name and identifier are empty when the listing call itself failed and
/// no resource was ever enumerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceOutcome {
    pub resource_name: String,
    pub resource_id: String,
    pub status: OutcomeStatus,
    /// Empty on success, human-readable error detail on failure
    pub message: String,
}

impl ResourceOutcome {
    pub fn success(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_name: name.into(),
            resource_id: id.into(),
            status: OutcomeStatus::Success,
            message: String::new(),
        }
    }

    pub fn failure(
        name: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            resource_name: name.into(),
            resource_id: id.into(),
            status: OutcomeStatus::Failed,
            message: message.into(),
        }
    }
}

/// A resource as returned by a listing call: identifier plus display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSummary {
    pub id: String,
    pub display_name: String,
}

/// Outcome report of one handler invocation for one (region, compartment)
/// scope.
///
/// Every resource the listing returned lands in exactly one of the two
/// sequences. A failed listing yields a report with a single synthetic
/// failure entry carrying empty name and identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HandlerReport {
    pub successes: Vec<ResourceOutcome>,
    pub failures: Vec<ResourceOutcome>,
}

impl HandlerReport {
    /// Report for a scope whose listing call failed before any resource
    /// could be enumerated.
    pub fn listing_failure(message: impl Into<String>) -> Self {
        Self {
            successes: Vec::new(),
            failures: vec![ResourceOutcome::failure("", "", message)],
        }
    }

    /// Route an outcome into the sequence matching its status.
    pub fn push(&mut self, outcome: ResourceOutcome) {
        match outcome.status {
            OutcomeStatus::Success => self.successes.push(outcome),
            OutcomeStatus::Failed => self.failures.push(outcome),
        }
    }

    /// All outcomes, successes first, each sequence in insertion order.
    pub fn outcomes(&self) -> impl Iterator<Item = &ResourceOutcome> {
        self.successes.iter().chain(self.failures.iter())
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successes.is_empty() && self.failures.is_empty()
    }
}

/// The (region, compartment) pair a handler ran against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub region: String,
    pub compartment_id: String,
}

impl ScopeKey {
    pub fn new(region: impl Into<String>, compartment_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            compartment_id: compartment_id.into(),
        }
    }
}

/// Accumulated reports for one process invocation, in sweep order.
///
/// Append-only; entries are never overwritten or deleted. A compartment
/// listed twice in the input is swept twice and contributes two entries.
#[derive(Debug, Default)]
pub struct RunResult {
    entries: Vec<(ScopeKey, HandlerReport)>,
}

impl RunResult {
    pub fn record(&mut self, scope: ScopeKey, report: HandlerReport) {
        self.entries.push((scope, report));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ScopeKey, HandlerReport)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_successes(&self) -> usize {
        self.entries.iter().map(|(_, r)| r.successes.len()).sum()
    }

    pub fn total_failures(&self) -> usize {
        self.entries.iter().map(|(_, r)| r.failures.len()).sum()
    }
}

/// Run-level metadata shared by every log row of one invocation
#[derive(Debug, Clone)]
pub struct RunMeta {
    /// Resource type tag the run was invoked with
    pub resource_type: String,
    pub started_at: DateTime<Utc>,
}

impl RunMeta {
    pub fn new(resource_type: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            resource_type: resource_type.into(),
            started_at,
        }
    }

    /// Timestamp rendered into every log row of the run
    pub fn row_timestamp(&self) -> String {
        self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
