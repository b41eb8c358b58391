//! Stop command implementation
//!
//! Orchestrates one full run: read the compartment list, confirm the
//! resolved scope with the operator, resolve the subscribed regions, sweep
//! every region x compartment pair, then print the hierarchical summary
//! and the audit log location.

use anyhow::{Context, Result};
use chrono::Utc;
use ocisweep_core::{
    audit, input, sweep, AuditLog, CloudClient, OciCliClient, RunMeta, RunResult, SilentObserver,
    SweepObserver,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::observer::ConsoleObserver;
use crate::output::OutputContext;
use crate::ExitCode;

pub fn run(
    resource_type: &str,
    compartments_file: &Path,
    profile: Option<String>,
    assume_yes: bool,
    ctx: &OutputContext,
) -> Result<ExitCode> {
    let resource_type = resource_type.to_lowercase();

    let compartment_ids = input::read_compartment_ids(compartments_file).with_context(|| {
        format!(
            "Failed to read compartment list from {}",
            compartments_file.display()
        )
    })?;

    if !ctx.json {
        ctx.line(&format!(
            "About to stop ALL running '{}' resources in {} compartment(s):",
            resource_type,
            compartment_ids.len()
        ));
        for compartment_id in &compartment_ids {
            ctx.line(&format!("  - {}", compartment_id));
        }
    }

    if !assume_yes && !confirm()? {
        ctx.line("Operation cancelled.");
        return Ok(ExitCode::Success);
    }

    let client = OciCliClient::new(profile);
    let regions = client
        .subscribed_regions()
        .context("Failed to resolve subscribed regions")?;
    tracing::info!(count = regions.len(), "resolved subscribed regions");

    let meta = RunMeta::new(resource_type.as_str(), Utc::now());
    let mut audit_log = AuditLog::new(audit::default_log_path(&resource_type, meta.started_at));
    let observer: Box<dyn SweepObserver> = if ctx.json {
        Box::new(SilentObserver)
    } else {
        Box::new(ConsoleObserver::new(ctx.clone()))
    };

    let results = sweep::run_sweep(
        &client,
        &regions,
        &compartment_ids,
        &resource_type,
        &meta,
        &mut audit_log,
        observer.as_ref(),
    )?;

    if ctx.json {
        ctx.json(&summary_json(&results, &audit_log))?;
    } else {
        print_summary(ctx, &results);
        if audit_log.rows_written() > 0 {
            ctx.success(&format!("Log written to {}", audit_log.path().display()));
        } else {
            ctx.info("No log rows written");
        }
    }

    Ok(ExitCode::Success)
}

/// Block on one line of operator input. Only an explicit "y" proceeds.
fn confirm() -> Result<bool> {
    print!("Proceed? (y/N): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn print_summary(ctx: &OutputContext, results: &RunResult) {
    ctx.section("Summary");

    if results.is_empty() {
        ctx.info("No scopes were processed");
        return;
    }

    for (scope, report) in results.iter() {
        ctx.line(&format!("[{}] {}", scope.region, scope.compartment_id));
        if report.successes.is_empty() {
            ctx.info("No successful actions");
        } else {
            ctx.info("Stopped:");
            for outcome in &report.successes {
                ctx.info(&format!(
                    "  - {} ({})",
                    outcome.resource_name, outcome.resource_id
                ));
            }
        }
        if report.failures.is_empty() {
            ctx.info("No failed actions");
        } else {
            ctx.info("Failed:");
            for outcome in &report.failures {
                ctx.info(&format!(
                    "  - {} ({}): {}",
                    outcome.resource_name, outcome.resource_id, outcome.message
                ));
            }
        }
    }

    ctx.line(&format!(
        "\nTotal: {} stopped, {} failed",
        results.total_successes(),
        results.total_failures()
    ));
}

fn summary_json(results: &RunResult, audit_log: &AuditLog) -> serde_json::Value {
    let scopes: Vec<serde_json::Value> = results
        .iter()
        .map(|(scope, report)| {
            serde_json::json!({
                "region": &scope.region,
                "compartment_id": &scope.compartment_id,
                "successes": &report.successes,
                "failures": &report.failures,
            })
        })
        .collect();

    let log_file = if audit_log.rows_written() > 0 {
        Some(audit_log.path().display().to_string())
    } else {
        None
    };

    serde_json::json!({
        "scopes": scopes,
        "stopped": results.total_successes(),
        "failed": results.total_failures(),
        "log_rows": audit_log.rows_written(),
        "log_file": log_file,
    })
}
