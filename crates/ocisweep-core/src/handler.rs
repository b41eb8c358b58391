//! Generic resource stop handler
//!
//! One parametrized pass replaces a hand-written handler per resource
//! type: list the running resources in a compartment, attempt the
//! type-specific stop action on each, and fold every outcome into a
//! [`HandlerReport`]. Errors never propagate out of here. A failed listing
//! becomes the report's single synthetic failure entry; a failed stop is
//! isolated to its resource and the remaining resources are still
//! attempted.

use crate::client::CloudClient;
use crate::descriptor::ResourceTypeDescriptor;
use crate::models::{HandlerReport, ResourceOutcome, ResourceSummary};
use crate::observer::SweepObserver;

/// Stop every running resource of one type in one (region, compartment)
/// scope.
///
/// An empty listing yields an empty report, which is not an error. Every
/// listed resource gets exactly one stop attempt.
pub fn stop_all_running<C>(
    client: &C,
    region: &str,
    compartment_id: &str,
    desc: &ResourceTypeDescriptor,
    observer: &dyn SweepObserver,
) -> HandlerReport
where
    C: CloudClient + ?Sized,
{
    let resources = match client.list_running(region, compartment_id, desc) {
        Ok(resources) => resources,
        Err(e) => {
            return HandlerReport::listing_failure(format!(
                "Failed to list {}s: {}",
                desc.label, e
            ))
        }
    };

    let mut report = HandlerReport::default();
    for resource in resources {
        observer.stopping_resource(desc, &resource);
        report.push(stop_one(client, region, resource, desc));
    }
    report
}

fn stop_one<C>(
    client: &C,
    region: &str,
    resource: ResourceSummary,
    desc: &ResourceTypeDescriptor,
) -> ResourceOutcome
where
    C: CloudClient + ?Sized,
{
    match client.stop_resource(region, &resource.id, desc) {
        Ok(()) => ResourceOutcome::success(resource.display_name, resource.id),
        Err(e) => ResourceOutcome::failure(
            resource.display_name,
            resource.id,
            format!("Failed to {} {}: {}", desc.action_label, desc.label, e),
        ),
    }
}
