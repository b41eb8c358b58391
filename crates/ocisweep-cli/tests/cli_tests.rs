//! Integration tests for the ocisweep CLI
//!
//! The oci CLI is substituted with a scripted shell stub injected via the
//! OCISWEEP_OCI_BIN environment variable. The stub records every
//! invocation to a call log next to it, so tests can assert exactly which
//! provider calls a run issued.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OCI_BIN_ENV: &str = "OCISWEEP_OCI_BIN";

fn ocisweep() -> Command {
    Command::cargo_bin("ocisweep").unwrap()
}

/// Write an executable stub standing in for the oci CLI. `cases` is the
/// body of a shell `case "$*"` dispatch on the full argument line.
fn write_stub(dir: &Path, cases: &str) -> PathBuf {
    let path = dir.join("oci-stub.sh");
    let call_log = dir.join("calls.log");
    let script = format!(
        "#!/bin/sh\necho \"$*\" >> \"{}\"\ncase \"$*\" in\n{}\nesac\n",
        call_log.display(),
        cases
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn recorded_calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Stub answering for two regions with one running compute instance in
/// every compartment.
fn two_region_stub(dir: &Path) -> PathBuf {
    write_stub(
        dir,
        r#"  *"region-subscription list"*)
    echo '{"data":[{"region-name":"us-ashburn-1"},{"region-name":"eu-frankfurt-1"}]}'
    ;;
  *"compute instance list"*)
    echo '{"data":[{"id":"ocid1.instance.oc1..aaa","display-name":"web-1","lifecycle-state":"RUNNING"}]}'
    ;;
  *"compute instance action"*)
    echo '{"data":{"id":"ocid1.instance.oc1..aaa","lifecycle-state":"STOPPING"}}'
    ;;
  *)
    echo "unexpected command: $*" >&2
    exit 1
    ;;"#,
    )
}

fn write_compartments(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("compartments.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn log_file_in(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("stop_") && n.ends_with(".csv"))
                .unwrap_or(false)
        })
}

#[test]
fn test_help() {
    ocisweep().arg("--help").assert().success().stdout(
        predicate::str::contains("stop")
            .and(predicate::str::contains("types"))
            .and(predicate::str::contains("doctor")),
    );
}

#[test]
fn test_version() {
    ocisweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ocisweep"));
}

#[test]
fn test_types_lists_all_tags() {
    ocisweep().arg("types").assert().success().stdout(
        predicate::str::contains("compute")
            .and(predicate::str::contains("mysql"))
            .and(predicate::str::contains("opensearch"))
            .and(predicate::str::contains("redis")),
    );
}

#[test]
fn test_types_json() {
    ocisweep()
        .args(["types", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"tag\"")
                .and(predicate::str::contains("opensearch"))
                .and(predicate::str::contains("\"running_state\"")),
        );
}

#[test]
fn test_stop_requires_both_arguments() {
    ocisweep()
        .arg("stop")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_input_file_is_fatal() {
    let temp = TempDir::new().unwrap();

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, "/nonexistent/oci")
        .args(["stop", "compute", "no-such-file.csv", "--assume-yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read compartment list"));
}

#[test]
fn test_declined_confirmation_has_no_side_effects() {
    let temp = TempDir::new().unwrap();
    write_compartments(temp.path(), "ocid1.compartment.a\n");

    // The binary override points nowhere; a clean exit proves no provider
    // call was ever attempted.
    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, "/nonexistent/oci")
        .args(["stop", "compute", "compartments.csv"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    assert!(log_file_in(temp.path()).is_none());
}

#[test]
fn test_anything_but_y_declines() {
    let temp = TempDir::new().unwrap();
    write_compartments(temp.path(), "ocid1.compartment.a\n");

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, "/nonexistent/oci")
        .args(["stop", "compute", "compartments.csv"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));
}

#[test]
fn test_full_run_sweeps_every_scope_and_writes_log() {
    let temp = TempDir::new().unwrap();
    let stub = two_region_stub(temp.path());
    write_compartments(temp.path(), "ocid1.compartment.a\nocid1.compartment.b\n");

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, &stub)
        .args(["stop", "compute", "compartments.csv", "--assume-yes"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Region: us-ashburn-1")
                .and(predicate::str::contains("Region: eu-frankfurt-1"))
                .and(predicate::str::contains("Stopping Compute Instance 'web-1'"))
                .and(predicate::str::contains("Log written to")),
        );

    // 2 regions x 2 compartments
    let calls = recorded_calls(temp.path());
    assert_eq!(
        calls.iter().filter(|c| c.contains("region-subscription list")).count(),
        1
    );
    assert_eq!(
        calls.iter().filter(|c| c.contains("compute instance list")).count(),
        4
    );
    assert_eq!(
        calls.iter().filter(|c| c.contains("compute instance action")).count(),
        4
    );
    // List calls carry the lifecycle filter and follow pagination
    assert!(calls
        .iter()
        .filter(|c| c.contains("compute instance list"))
        .all(|c| c.contains("--lifecycle-state RUNNING") && c.contains("--all")));

    let log = log_file_in(temp.path()).expect("audit log should exist");
    let contents = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5, "one header plus one row per scope");
    assert_eq!(
        lines[0],
        "timestamp,region,compartment_id,resource_type,resource_name,resource_id,status,message"
    );
    for line in &lines[1..] {
        assert!(line.contains("web-1"));
        assert!(line.contains("success"));
    }
}

#[test]
fn test_listing_failure_is_isolated_to_its_scope() {
    let temp = TempDir::new().unwrap();
    let stub = write_stub(
        temp.path(),
        r#"  *"region-subscription list"*)
    echo '{"data":[{"region-name":"us-ashburn-1"}]}'
    ;;
  *"ocid1.compartment.bad"*)
    echo 'ServiceError: NotAuthorizedOrNotFound' >&2
    exit 1
    ;;
  *"compute instance list"*)
    echo '{"data":[{"id":"ocid1.instance.oc1..aaa","display-name":"web-1","lifecycle-state":"RUNNING"}]}'
    ;;
  *"compute instance action"*)
    echo '{"data":null}'
    ;;"#,
    );
    write_compartments(temp.path(), "ocid1.compartment.bad\nocid1.compartment.good\n");

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, &stub)
        .args(["stop", "compute", "compartments.csv", "--assume-yes"])
        .assert()
        .success();

    let log = log_file_in(temp.path()).expect("audit log should exist");
    let contents = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "header, one synthetic failure, one success");

    let failed: Vec<&&str> = lines[1..].iter().filter(|l| l.contains(",failed,")).collect();
    assert_eq!(failed.len(), 1);
    // Synthetic entry has empty name and id columns and a descriptive message
    assert!(failed[0].contains(",compute,,,failed,"));
    assert!(failed[0].contains("NotAuthorizedOrNotFound"));

    let succeeded: Vec<&&str> = lines[1..].iter().filter(|l| l.contains(",success,")).collect();
    assert_eq!(succeeded.len(), 1);
    assert!(succeeded[0].contains("ocid1.compartment.good"));
}

#[test]
fn test_stop_failure_does_not_short_circuit_siblings() {
    let temp = TempDir::new().unwrap();
    let stub = write_stub(
        temp.path(),
        r#"  *"region-subscription list"*)
    echo '{"data":[{"region-name":"us-ashburn-1"}]}'
    ;;
  *"compute instance list"*)
    echo '{"data":[{"id":"ocid1.instance.oc1..aaa","display-name":"r1","lifecycle-state":"RUNNING"},{"id":"ocid1.instance.oc1..bbb","display-name":"r2","lifecycle-state":"RUNNING"},{"id":"ocid1.instance.oc1..ccc","display-name":"r3","lifecycle-state":"RUNNING"}]}'
    ;;
  *"ocid1.instance.oc1..bbb"*)
    echo 'Instance is in a conflicting state' >&2
    exit 1
    ;;
  *"compute instance action"*)
    echo '{"data":null}'
    ;;"#,
    );
    write_compartments(temp.path(), "ocid1.compartment.a\n");

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, &stub)
        .args(["stop", "compute", "compartments.csv", "--assume-yes"])
        .assert()
        .success();

    // All three instances were attempted
    let calls = recorded_calls(temp.path());
    assert_eq!(
        calls.iter().filter(|c| c.contains("compute instance action")).count(),
        3
    );

    let log = log_file_in(temp.path()).expect("audit log should exist");
    let contents = fs::read_to_string(&log).unwrap();
    assert_eq!(contents.lines().count(), 4);
    assert_eq!(contents.matches(",success,").count(), 2);
    assert_eq!(contents.matches(",failed,").count(), 1);
    let failed_line = contents
        .lines()
        .find(|l| l.contains(",failed,"))
        .unwrap();
    assert!(failed_line.contains("r2"));
    assert!(failed_line.contains("Failed to stop Compute Instance"));
}

#[test]
fn test_unsupported_type_makes_no_resource_calls() {
    let temp = TempDir::new().unwrap();
    let stub = write_stub(
        temp.path(),
        r#"  *"region-subscription list"*)
    echo '{"data":[{"region-name":"us-ashburn-1"},{"region-name":"eu-frankfurt-1"}]}'
    ;;
  *)
    echo "unexpected command: $*" >&2
    exit 1
    ;;"#,
    );
    write_compartments(temp.path(), "ocid1.compartment.a\n");

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, &stub)
        .args(["stop", "bogus_type", "compartments.csv", "--assume-yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not supported"));

    // Only the region lookup ever reached the provider
    let calls = recorded_calls(temp.path());
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("region-subscription list"));

    assert!(log_file_in(temp.path()).is_none());
}

#[test]
fn test_stop_json_summary() {
    let temp = TempDir::new().unwrap();
    let stub = two_region_stub(temp.path());
    write_compartments(temp.path(), "ocid1.compartment.a\nocid1.compartment.b\n");

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, &stub)
        .args(["stop", "compute", "compartments.csv", "--assume-yes", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"stopped\": 4")
                .and(predicate::str::contains("\"failed\": 0"))
                .and(predicate::str::contains("\"log_rows\": 4")),
        );
}

#[test]
fn test_doctor_with_stub_oci() {
    let temp = TempDir::new().unwrap();
    let stub = write_stub(
        temp.path(),
        r#"  *"--version"*)
    echo '3.40.0'
    ;;"#,
    );

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, &stub)
        .arg("doctor")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("System Diagnostics").and(predicate::str::contains("3.40.0")),
        );
}

#[test]
fn test_doctor_without_oci_fails() {
    let temp = TempDir::new().unwrap();

    ocisweep()
        .current_dir(temp.path())
        .env(OCI_BIN_ENV, "/nonexistent/oci")
        .arg("doctor")
        .assert()
        .failure()
        .code(20)
        .stdout(predicate::str::contains("not found in PATH"));
}

#[test]
fn test_completions() {
    ocisweep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
