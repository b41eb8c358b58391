//! Region x compartment sweep driver
//!
//! Drives the nested loop over every subscribed region and every listed
//! compartment, dispatching each scope to the generic stop handler and
//! accumulating results.

use crate::audit::{AuditLog, LogRow};
use crate::client::CloudClient;
use crate::descriptor;
use crate::error::Result;
use crate::handler;
use crate::models::{RunMeta, RunResult, ScopeKey};
use crate::observer::SweepObserver;

/// Run the full sweep.
///
/// Regions and compartments are processed strictly in the given order,
/// duplicates included. An unsupported `resource_type` is announced per
/// scope and skipped without a result entry and without any provider
/// call. Each scope's log rows are appended as soon as the scope
/// completes, so a crash later in the run loses nothing already swept.
///
/// Handler-level failures become data in the returned [`RunResult`]; the
/// only errors surfacing here are audit log IO failures.
pub fn run_sweep<C>(
    client: &C,
    regions: &[String],
    compartment_ids: &[String],
    resource_type: &str,
    meta: &RunMeta,
    audit: &mut AuditLog,
    observer: &dyn SweepObserver,
) -> Result<RunResult>
where
    C: CloudClient + ?Sized,
{
    let descriptor = descriptor::lookup(resource_type);
    let mut results = RunResult::default();

    for region in regions {
        observer.region_started(region);
        for compartment_id in compartment_ids {
            observer.compartment_started(region, compartment_id);

            let Some(desc) = descriptor else {
                observer.unsupported_type(resource_type);
                continue;
            };

            let report = handler::stop_all_running(client, region, compartment_id, desc, observer);
            let scope = ScopeKey::new(region.clone(), compartment_id.clone());

            audit.append(&LogRow::from_report(meta, &scope, &report))?;
            observer.scope_finished(&scope, &report);
            results.record(scope, report);
        }
    }

    Ok(results)
}
