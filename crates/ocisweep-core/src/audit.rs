//! Audit log writing
//!
//! Every resource outcome of a run is flattened into a fixed eight-column
//! CSV row. The file gets a single header row when it is first created and
//! is appended to afterwards; rows are written in report order as each
//! scope completes, so rows for finished scopes survive a crash later in
//! the run.

use crate::error::Result;
use crate::models::{HandlerReport, OutcomeStatus, RunMeta, ScopeKey};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column order of the audit log
pub const LOG_HEADER: [&str; 8] = [
    "timestamp",
    "region",
    "compartment_id",
    "resource_type",
    "resource_name",
    "resource_id",
    "status",
    "message",
];

/// Flattened projection of one resource outcome plus run metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogRow {
    pub timestamp: String,
    pub region: String,
    pub compartment_id: String,
    pub resource_type: String,
    pub resource_name: String,
    pub resource_id: String,
    pub status: OutcomeStatus,
    pub message: String,
}

impl LogRow {
    /// Flatten one scope's report, successes first, preserving handler
    /// order within each sequence.
    pub fn from_report(meta: &RunMeta, scope: &ScopeKey, report: &HandlerReport) -> Vec<LogRow> {
        report
            .outcomes()
            .map(|outcome| LogRow {
                timestamp: meta.row_timestamp(),
                region: scope.region.clone(),
                compartment_id: scope.compartment_id.clone(),
                resource_type: meta.resource_type.clone(),
                resource_name: outcome.resource_name.clone(),
                resource_id: outcome.resource_id.clone(),
                status: outcome.status,
                message: outcome.message.clone(),
            })
            .collect()
    }

    fn fields(&self) -> [&str; 8] {
        [
            &self.timestamp,
            &self.region,
            &self.compartment_id,
            &self.resource_type,
            &self.resource_name,
            &self.resource_id,
            self.status.as_str(),
            &self.message,
        ]
    }
}

/// Log filename for one run: the resource type tag plus a compact UTC
/// timestamp with second precision, unique per run, in the working
/// directory.
pub fn default_log_path(resource_type: &str, started_at: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!(
        "stop_{}_log_{}.csv",
        resource_type,
        started_at.format("%Y%m%dT%H%M%SZ")
    ))
}

/// Append-or-create CSV writer for one run's audit log
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    rows_written: usize,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows appended so far in this run
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Append rows, writing the header first only if the path does not
    /// already exist. An empty slice is a no-op and does not create the
    /// file.
    pub fn append(&mut self, rows: &[LogRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let write_header = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if write_header {
            writeln!(file, "{}", csv_line(&LOG_HEADER))?;
        }
        for row in rows {
            writeln!(file, "{}", csv_line(&row.fields()))?;
        }

        self.rows_written += rows.len();
        Ok(())
    }
}

fn csv_line(fields: &[&str]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&csv_field(field));
    }
    line
}

/// Quote a field when it contains the delimiter, a quote, or a line break
fn csv_field(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
