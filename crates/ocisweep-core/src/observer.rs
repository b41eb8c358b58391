//! Progress reporting seam for the sweep driver
//!
//! Core stays print-free; the CLI supplies a console implementation and
//! tests plug in silent or recording ones.

use crate::descriptor::ResourceTypeDescriptor;
use crate::models::{HandlerReport, ResourceSummary, ScopeKey};

/// Receives progress callbacks while a sweep runs.
///
/// Every method defaults to a no-op, so implementations only override what
/// they want to render.
pub trait SweepObserver {
    fn region_started(&self, _region: &str) {}

    fn compartment_started(&self, _region: &str, _compartment_id: &str) {}

    /// Called immediately before each stop attempt
    fn stopping_resource(&self, _desc: &ResourceTypeDescriptor, _resource: &ResourceSummary) {}

    /// Called once per scope when the resource-type selector is unsupported
    fn unsupported_type(&self, _resource_type: &str) {}

    fn scope_finished(&self, _scope: &ScopeKey, _report: &HandlerReport) {}
}

/// Observer that renders nothing
#[derive(Debug, Default)]
pub struct SilentObserver;

impl SweepObserver for SilentObserver {}
