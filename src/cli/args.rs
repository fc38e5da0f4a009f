//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::locate::LocateArgs;
use crate::cli::commands::plot::PlotArgs;
use crate::cli::commands::session::SessionArgs;
use crate::cli::commands::vars::VarsArgs;

#[derive(Parser, Debug)]
#[command(
    name = "spechist",
    version,
    about = "Visualize manufacturing test results against spec limits"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "auto")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the selectable test variables from a spec file
    Vars(VarsArgs),

    /// Render a histogram of one variable against its spec limits
    Plot(PlotArgs),

    /// Locate one unit on the histogram and show its full record
    Locate(LocateArgs),

    /// Interactive variable selection and DUT_SN search loop
    Session(SessionArgs),
}

/// Output format for query-shaped commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pick a sensible format for the command
    Auto,
    /// Human-readable terminal output
    Table,
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// JSON
    Json,
}
