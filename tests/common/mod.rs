//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a spechist command
pub fn spechist() -> Command {
    Command::new(cargo::cargo_bin!("spechist"))
}

/// Write a fixture file into a temp directory
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A spec file with voltage/current variables, a non-selectable test, a
/// non-numeric limit, and a degenerate (zero-width) limit pair
pub fn sample_spec(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "specs.csv",
        "Test Names,USL,LSL\n\
         V_OUT,5.1,0.1\n\
         I_LOAD,2.0,0.5\n\
         T_AMBIENT,85,-40\n\
         V_BAD,TBD,0.1\n\
         V_FLAT,3.3,3.3\n",
    )
}

/// First result file: three units
pub fn sample_results_one(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "results1.csv",
        "DUT_SN,V_OUT,I_LOAD\n\
         S1,1.0,0.9\n\
         S2,2.5,1.1\n\
         S3,4.0,1.9\n",
    )
}

/// Second result file: a retest of S2 and a new unit, without I_LOAD
pub fn sample_results_two(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "results2.csv",
        "DUT_SN,V_OUT\n\
         S2,2.6\n\
         S4,3.0\n",
    )
}

/// Temp dir with the full fixture set: (dir, spec, results1, results2)
pub fn setup_fixtures() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let spec = sample_spec(tmp.path());
    let r1 = sample_results_one(tmp.path());
    let r2 = sample_results_two(tmp.path());
    (tmp, spec, r1, r2)
}
