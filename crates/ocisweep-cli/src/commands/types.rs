//! Types command implementation

use anyhow::Result;
use comfy_table::Cell;
use ocisweep_core::RESOURCE_TYPES;

use crate::output::{OutputContext, TableBuilder};
use crate::ExitCode;

pub fn run(ctx: &OutputContext) -> Result<ExitCode> {
    if ctx.json {
        let types: Vec<serde_json::Value> = RESOURCE_TYPES
            .iter()
            .map(|desc| {
                serde_json::json!({
                    "tag": desc.tag,
                    "resource": desc.label,
                    "running_state": desc.running_state,
                    "action": desc.action_label,
                })
            })
            .collect();

        ctx.json(&types)?;
    } else {
        let mut table = TableBuilder::new(vec!["Tag", "Resource", "Running state", "Action"]);

        for desc in RESOURCE_TYPES {
            table.add_row(vec![
                Cell::new(desc.tag),
                Cell::new(desc.label),
                Cell::new(desc.running_state),
                Cell::new(desc.action_label),
            ]);
        }

        println!("{}", table.build());
    }

    Ok(ExitCode::Success)
}
