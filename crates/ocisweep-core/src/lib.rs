//! ocisweep core library
//!
//! Bulk-stop support for OCI resources: the descriptor table of supported
//! resource types, the `oci` CLI-backed provider client, the generic stop
//! handler and the region x compartment sweep driver, plus compartment
//! list input and the CSV audit log.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use ocisweep_core::audit::{default_log_path, AuditLog};
//! use ocisweep_core::client::OciCliClient;
//! use ocisweep_core::models::RunMeta;
//! use ocisweep_core::observer::SilentObserver;
//! use ocisweep_core::sweep::run_sweep;
//! use ocisweep_core::CloudClient;
//!
//! let client = OciCliClient::new(Some("dev".to_string()));
//! let regions = client.subscribed_regions().unwrap();
//! let compartments = vec!["ocid1.compartment.oc1..example".to_string()];
//! let meta = RunMeta::new("compute", Utc::now());
//! let mut audit = AuditLog::new(default_log_path("compute", meta.started_at));
//!
//! let results = run_sweep(
//!     &client,
//!     &regions,
//!     &compartments,
//!     "compute",
//!     &meta,
//!     &mut audit,
//!     &SilentObserver,
//! )
//! .unwrap();
//! println!(
//!     "{} stopped, {} failed",
//!     results.total_successes(),
//!     results.total_failures()
//! );
//! ```

pub mod audit;
pub mod client;
pub mod descriptor;
pub mod error;
pub mod handler;
pub mod input;
pub mod models;
pub mod observer;
pub mod sweep;

// Re-export commonly used types
pub use audit::{default_log_path, AuditLog, LogRow, LOG_HEADER};
pub use client::{CloudClient, OciCliClient, OCI_BIN_ENV};
pub use descriptor::{lookup, ResourceTypeDescriptor, RESOURCE_TYPES};
pub use error::{Result, SweepError};
pub use handler::stop_all_running;
pub use input::read_compartment_ids;
pub use models::{
    HandlerReport, OutcomeStatus, ResourceOutcome, ResourceSummary, RunMeta, RunResult, ScopeKey,
};
pub use observer::{SilentObserver, SweepObserver};
pub use sweep::run_sweep;
