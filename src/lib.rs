//! spechist: histogram viewer for manufacturing test results
//!
//! Loads a test-spec file (USL/LSL per test name) and one or more result
//! files (per-unit measurements keyed by DUT_SN), renders a density
//! histogram of a selected variable against its spec limits in the
//! terminal, and can locate a single unit's measurement on the plot.

pub mod cli;
pub mod core;
