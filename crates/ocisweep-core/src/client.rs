//! Provider client implementations
//!
//! This module provides the CloudClient trait and the implementation that
//! drives the vendor's `oci` CLI as a subprocess. Every invocation asks for
//! `--output json` and parses stdout; the profile and region are passed
//! explicitly on each call, so one client serves the whole multi-region
//! sweep.

use crate::descriptor::ResourceTypeDescriptor;
use crate::error::{Result, SweepError};
use crate::models::ResourceSummary;
use serde_json::Value;
use std::process::Command;

/// Environment variable overriding the `oci` binary path.
///
/// Used by the CLI integration tests to substitute a scripted stub.
pub const OCI_BIN_ENV: &str = "OCISWEEP_OCI_BIN";

/// Trait for clients that can enumerate and stop provider resources
pub trait CloudClient {
    /// List the names of the regions the tenancy is subscribed to
    fn subscribed_regions(&self) -> Result<Vec<String>>;

    /// List resources of one type in a compartment, filtered to the
    /// descriptor's running state
    fn list_running(
        &self,
        region: &str,
        compartment_id: &str,
        desc: &ResourceTypeDescriptor,
    ) -> Result<Vec<ResourceSummary>>;

    /// Issue the type-specific stop action against one resource
    fn stop_resource(
        &self,
        region: &str,
        resource_id: &str,
        desc: &ResourceTypeDescriptor,
    ) -> Result<()>;
}

/// Client backed by the `oci` CLI
#[derive(Debug, Clone, Default)]
pub struct OciCliClient {
    profile: Option<String>,
}

impl OciCliClient {
    /// Create a client. `profile` selects the oci config profile; `None`
    /// leaves the CLI's own default in effect.
    pub fn new(profile: Option<String>) -> Self {
        Self { profile }
    }

    fn binary() -> String {
        std::env::var(OCI_BIN_ENV).unwrap_or_else(|_| "oci".to_string())
    }

    /// Check if the oci CLI is available
    pub fn is_available() -> bool {
        Command::new(Self::binary())
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Get the oci CLI version string
    pub fn version() -> Option<String> {
        Command::new(Self::binary())
            .arg("--version")
            .output()
            .ok()
            .filter(|o| o.status.success())
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
    }

    fn base_command(&self, region: Option<&str>) -> Command {
        let mut cmd = Command::new(Self::binary());
        cmd.args(["--output", "json"]);
        if let Some(profile) = &self.profile {
            cmd.args(["--profile", profile]);
        }
        if let Some(region) = region {
            cmd.args(["--region", region]);
        }
        cmd
    }

    fn invoke(mut cmd: Command, what: &str) -> Result<Value> {
        tracing::debug!(command = what, "invoking oci CLI");

        let output = cmd.output().map_err(|e| {
            SweepError::CliUnavailable(format!("failed to spawn `{}`: {}", Self::binary(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            let detail = if detail.is_empty() {
                format!("exit status {}", output.status)
            } else {
                detail.to_string()
            };
            return Err(SweepError::CommandFailed {
                command: what.to_string(),
                detail,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // Action commands print nothing on success for some resource types
        if stdout.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(stdout.trim())?)
    }
}

impl CloudClient for OciCliClient {
    fn subscribed_regions(&self) -> Result<Vec<String>> {
        let mut cmd = self.base_command(None);
        cmd.args(["iam", "region-subscription", "list"]);
        let response = Self::invoke(cmd, "iam region-subscription list")?;

        data_items(&response)?
            .iter()
            .map(|item| {
                item.get("region-name")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        SweepError::MalformedOutput(
                            "region subscription entry missing region-name".to_string(),
                        )
                    })
            })
            .collect()
    }

    fn list_running(
        &self,
        region: &str,
        compartment_id: &str,
        desc: &ResourceTypeDescriptor,
    ) -> Result<Vec<ResourceSummary>> {
        let mut cmd = self.base_command(Some(region));
        cmd.args(desc.list_cmd);
        cmd.args(["--compartment-id", compartment_id]);
        cmd.args(["--lifecycle-state", desc.running_state]);
        // Follow pagination so listings are complete for every type
        cmd.arg("--all");

        let response = Self::invoke(cmd, &desc.list_cmd.join(" "))?;
        data_items(&response)?
            .iter()
            .map(|record| summary_from_record(desc, record))
            .collect()
    }

    fn stop_resource(
        &self,
        region: &str,
        resource_id: &str,
        desc: &ResourceTypeDescriptor,
    ) -> Result<()> {
        let mut cmd = self.base_command(Some(region));
        cmd.args(desc.stop_cmd);
        cmd.args([desc.id_flag, resource_id]);
        cmd.args(desc.stop_args);

        Self::invoke(cmd, &desc.stop_cmd.join(" "))?;
        Ok(())
    }
}

/// Extract the record array from an oci CLI response.
///
/// Accepts the flat `{"data": [...]}` shape and the paginated
/// `{"data": {"items": [...]}}` wrapper. A null response or absent `data`
/// key is an empty result set, not an error.
fn data_items(response: &Value) -> Result<Vec<Value>> {
    let data = match response {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => match map.get("data") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(data) => data,
        },
        _ => {
            return Err(SweepError::MalformedOutput(
                "response is not a JSON object".to_string(),
            ))
        }
    };

    match data {
        Value::Array(items) => Ok(items.clone()),
        Value::Object(map) => match map.get("items") {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Err(SweepError::MalformedOutput(
                "data object carries no items array".to_string(),
            )),
        },
        _ => Err(SweepError::MalformedOutput(
            "data is neither an array nor an items wrapper".to_string(),
        )),
    }
}

fn summary_from_record(
    desc: &ResourceTypeDescriptor,
    record: &Value,
) -> Result<ResourceSummary> {
    let id = record
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| SweepError::MalformedOutput(format!("{} record missing id", desc.label)))?;
    let display_name = record
        .get(desc.name_field)
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(ResourceSummary {
        id: id.to_string(),
        display_name: display_name.to_string(),
    })
}
