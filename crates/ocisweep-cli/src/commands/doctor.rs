//! Doctor command implementation

use anyhow::Result;
use directories::UserDirs;
use ocisweep_core::OciCliClient;
use serde::Serialize;

use crate::output::OutputContext;
use crate::ExitCode;

#[derive(Serialize)]
struct Check {
    name: String,
    status: String,
    message: String,
    required: bool,
}

pub fn run(ctx: &OutputContext) -> Result<ExitCode> {
    let mut checks = Vec::new();
    let mut all_required_passed = true;

    for check in [check_oci_cli(), check_oci_config(), check_working_dir()] {
        if check.status == "fail" && check.required {
            all_required_passed = false;
        }
        checks.push(check);
    }

    if ctx.json {
        ctx.json(&serde_json::json!({
            "checks": checks,
            "all_passed": all_required_passed
        }))?;
    } else {
        println!("System Diagnostics");
        println!("==================");
        println!();

        for check in &checks {
            let indicator = if check.status == "pass" {
                if ctx.no_color {
                    "✓"
                } else {
                    "\x1b[32m✓\x1b[0m"
                }
            } else if check.required {
                if ctx.no_color {
                    "✗"
                } else {
                    "\x1b[31m✗\x1b[0m"
                }
            } else {
                if ctx.no_color {
                    "-"
                } else {
                    "\x1b[33m-\x1b[0m"
                }
            };

            let required_label = if check.required { "" } else { " (optional)" };
            println!(
                "{} {}{}: {}",
                indicator, check.name, required_label, check.message
            );
        }

        println!();
        if all_required_passed {
            ctx.success("All required checks passed");
        } else {
            ctx.error("Some required checks failed");
        }
    }

    if all_required_passed {
        Ok(ExitCode::Success)
    } else if checks[0].status == "fail" {
        Ok(ExitCode::OciUnavailable)
    } else {
        Ok(ExitCode::GeneralError)
    }
}

fn check_oci_cli() -> Check {
    if OciCliClient::is_available() {
        let version = OciCliClient::version().unwrap_or_else(|| "unknown".to_string());
        Check {
            name: "oci".to_string(),
            status: "pass".to_string(),
            message: version,
            required: true,
        }
    } else {
        Check {
            name: "oci".to_string(),
            status: "fail".to_string(),
            message: "not found in PATH".to_string(),
            required: true,
        }
    }
}

fn check_oci_config() -> Check {
    match UserDirs::new().map(|dirs| dirs.home_dir().join(".oci").join("config")) {
        Some(path) if path.exists() => Check {
            name: "oci_config".to_string(),
            status: "pass".to_string(),
            message: path.display().to_string(),
            required: false,
        },
        Some(path) => Check {
            name: "oci_config".to_string(),
            status: "fail".to_string(),
            message: format!("{} not found", path.display()),
            required: false,
        },
        None => Check {
            name: "oci_config".to_string(),
            status: "fail".to_string(),
            message: "could not determine home directory".to_string(),
            required: false,
        },
    }
}

fn check_working_dir() -> Check {
    // The audit log lands in the working directory
    let test_file = std::path::Path::new(".ocisweep_write_test");
    match std::fs::write(test_file, "test") {
        Ok(()) => {
            let _ = std::fs::remove_file(test_file);
            Check {
                name: "working_dir".to_string(),
                status: "pass".to_string(),
                message: "writable".to_string(),
                required: true,
            }
        }
        Err(e) => Check {
            name: "working_dir".to_string(),
            status: "fail".to_string(),
            message: format!("not writable: {}", e),
            required: true,
        },
    }
}
