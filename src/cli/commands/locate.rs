//! `spechist locate` command - find one unit on the histogram
//!
//! Searches the raw result table for a serial number, marks its
//! measurement on the plot, and shows the unit's full test record.

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{escape_csv, fmt_measure};
use crate::cli::output::effective_format;
use crate::cli::viz;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{locate, present_record, Session};

use super::plot::{prepare_plot, render_plot_text};

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    /// Spec file (CSV with "Test Names", USL and LSL columns)
    #[arg(long, short = 's')]
    pub spec: PathBuf,

    /// Result files (CSV with a DUT_SN column), concatenated in order
    #[arg(long, short = 'r', required = true, num_args = 1..)]
    pub results: Vec<PathBuf>,

    /// Test variable to plot (a V_/I_ name from the spec file)
    #[arg(long, short = 'v')]
    pub var: String,

    /// Unit serial number to search for (exact, case-sensitive)
    #[arg(long)]
    pub sn: String,

    /// Number of histogram bins (default: 19)
    #[arg(long, default_value = "19")]
    pub bins: usize,

    /// Bin every loaded row instead of the deduplicated per-unit view
    #[arg(long)]
    pub raw: bool,

    /// Render with braille canvas graphics
    #[arg(long)]
    pub braille: bool,
}

#[derive(Serialize)]
struct LocateOutput<'a> {
    dut_sn: &'a str,
    variable: &'a str,
    row: usize,
    value: Option<f64>,
    record: &'a [(String, String)],
}

pub fn run(args: LocateArgs, global: &GlobalOpts) -> Result<()> {
    let session = Session::new()
        .with_spec(&args.spec)
        .map_err(|e| miette::miette!("{}", e))?
        .with_results(&args.results)
        .map_err(|e| miette::miette!("{}", e))?;

    let plot = prepare_plot(&session, &args.var, args.bins, args.raw)?;
    let raw_results = session
        .results()
        .ok_or_else(|| miette::miette!("no result files loaded"))?;

    let format = effective_format(global.output, false);

    // the search always scans the raw table; first match wins
    let point = match locate(raw_results, &args.var, &args.sn) {
        Ok(point) => point,
        Err(e) => {
            // marker and record table are cleared on a failed search
            if matches!(format, OutputFormat::Auto | OutputFormat::Table) {
                println!("{}", render_plot_text(&plot, None, args.braille));
                println!();
            }
            return Err(miette::miette!("{}", e));
        }
    };

    let record = present_record(raw_results, point.row);

    match format {
        OutputFormat::Json => {
            let out = LocateOutput {
                dut_sn: &args.sn,
                variable: &args.var,
                row: point.row,
                value: point.value,
                record: &record,
            };
            println!("{}", serde_json::to_string_pretty(&out).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!(
                "{}",
                record
                    .iter()
                    .map(|(name, _)| escape_csv(name))
                    .collect::<Vec<_>>()
                    .join(",")
            );
            println!(
                "{}",
                record
                    .iter()
                    .map(|(_, value)| escape_csv(value))
                    .collect::<Vec<_>>()
                    .join(",")
            );
        }
        OutputFormat::Tsv => {
            for (name, value) in &record {
                println!("{}\t{}", name, value);
            }
        }
        OutputFormat::Auto | OutputFormat::Table => {
            let marker = point.value.map(|v| (v, args.sn.as_str()));
            println!("{}", render_plot_text(&plot, marker, args.braille));
            println!();

            match point.value {
                Some(value) => println!(
                    "   {} {} {} = {} (row {})",
                    style("◀").green().bold(),
                    style(&args.sn).bold(),
                    args.var,
                    fmt_measure(Some(value)),
                    point.row
                ),
                None => println!(
                    "   {}",
                    style(format!(
                        "unit {} has no {} measurement; marker cleared",
                        args.sn, args.var
                    ))
                    .yellow()
                ),
            }

            println!();
            println!("{}", viz::render_record_table(&record));
        }
    }

    Ok(())
}
