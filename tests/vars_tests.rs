//! `vars` command tests - selectable variable listing

mod common;

use common::{sample_spec, setup_fixtures, spechist, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_vars_lists_prefixed_variables_in_order() {
    let tmp = TempDir::new().unwrap();
    let spec = sample_spec(tmp.path());

    let output = spechist()
        .args(["vars", "--spec"])
        .arg(&spec)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["V_OUT", "I_LOAD", "V_BAD", "V_FLAT"]);
}

#[test]
fn test_vars_excludes_unprefixed_tests() {
    let tmp = TempDir::new().unwrap();
    let spec = sample_spec(tmp.path());

    spechist()
        .args(["vars", "--spec"])
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::contains("T_AMBIENT").not());
}

#[test]
fn test_vars_count() {
    let (_tmp, spec, _r1, _r2) = setup_fixtures();

    spechist()
        .args(["vars", "--count", "--spec"])
        .arg(&spec)
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_vars_json_with_limits() {
    let (_tmp, spec, _r1, _r2) = setup_fixtures();

    let output = spechist()
        .args(["vars", "--limits", "-o", "json", "--spec"])
        .arg(&spec)
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["name"], "V_OUT");
    assert_eq!(entries[0]["usl"], 5.1);
    assert_eq!(entries[0]["lsl"], 0.1);
    // non-numeric USL stays undefined
    assert_eq!(entries[2]["name"], "V_BAD");
    assert!(entries[2].get("usl").is_none());
}

#[test]
fn test_vars_missing_name_column() {
    let tmp = TempDir::new().unwrap();
    let spec = write_file(tmp.path(), "specs.csv", "Name,USL,LSL\nV_OUT,5.1,0.1\n");

    spechist()
        .args(["vars", "--spec"])
        .arg(&spec)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Test Names"));
}

#[test]
fn test_vars_empty_spec() {
    let tmp = TempDir::new().unwrap();
    let spec = write_file(tmp.path(), "specs.csv", "Test Names,USL,LSL\nT_X,1,0\n");

    spechist()
        .args(["vars", "--spec"])
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::contains("No selectable variables found."));
}
