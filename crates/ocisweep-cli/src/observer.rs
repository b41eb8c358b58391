//! Console rendering of sweep progress

use ocisweep_core::{
    HandlerReport, ResourceSummary, ResourceTypeDescriptor, ScopeKey, SweepObserver,
};

use crate::output::OutputContext;

/// Renders the live progress stream: one line per region, compartment,
/// and resource as the sweep reaches it.
pub struct ConsoleObserver {
    ctx: OutputContext,
}

impl ConsoleObserver {
    pub fn new(ctx: OutputContext) -> Self {
        Self { ctx }
    }
}

impl SweepObserver for ConsoleObserver {
    fn region_started(&self, region: &str) {
        self.ctx.section(&format!("Region: {}", region));
    }

    fn compartment_started(&self, _region: &str, compartment_id: &str) {
        self.ctx.line(&format!("Compartment: {}", compartment_id));
    }

    fn stopping_resource(&self, desc: &ResourceTypeDescriptor, resource: &ResourceSummary) {
        self.ctx.info(&format!(
            "Stopping {} '{}' ({}) ...",
            desc.label, resource.display_name, resource.id
        ));
    }

    fn unsupported_type(&self, resource_type: &str) {
        self.ctx.warn(&format!(
            "Resource type '{}' is not supported, skipping",
            resource_type
        ));
    }

    fn scope_finished(&self, _scope: &ScopeKey, report: &HandlerReport) {
        if report.is_empty() {
            self.ctx.info("Nothing running");
        } else {
            self.ctx.info(&format!(
                "{} stopped, {} failed",
                report.successes.len(),
                report.failures.len()
            ));
        }
    }
}
