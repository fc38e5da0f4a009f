//! `spechist plot` command - histogram of one variable against its limits

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::output::effective_format;
use crate::cli::viz;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::histogram::{compute_histogram, Histogram};
use crate::core::limits::display_range;
use crate::core::Session;

#[derive(clap::Args, Debug)]
pub struct PlotArgs {
    /// Spec file (CSV with "Test Names", USL and LSL columns)
    #[arg(long, short = 's')]
    pub spec: PathBuf,

    /// Result files (CSV with a DUT_SN column), concatenated in order
    #[arg(long, short = 'r', required = true, num_args = 1..)]
    pub results: Vec<PathBuf>,

    /// Test variable to plot (a V_/I_ name from the spec file)
    #[arg(long, short = 'v')]
    pub var: String,

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

/// A fully prepared plot for one variable: resolved limits, padded display
/// range, and the binned distribution.
pub(crate) struct PreparedPlot {
    pub variable: String,
    pub usl: f64,
    pub lsl: f64,
    pub display: (f64, f64),
    pub histogram: Histogram,
    pub samples: usize,
}

/// Resolve limits and bin the selected variable's values.
///
/// Uses the deduplicated per-unit view unless `raw` is set. A variable
/// absent from the results bins an empty distribution rather than failing.
pub(crate) fn prepare_plot(
    session: &Session,
    variable: &str,
    bins: usize,
    raw: bool,
) -> Result<PreparedPlot> {
    let spec = session
        .spec()
        .ok_or_else(|| miette::miette!("no spec file loaded"))?;
    let limits = spec
        .resolve_limits(variable)
        .map_err(|e| miette::miette!("{}", e))?;
    let (Some(usl), Some(lsl)) = (limits.usl, limits.lsl) else {
        return Err(miette::miette!(
            "spec limits for \"{}\" are not numeric; nothing to plot",
            variable
        ));
    };

    let table = if raw {
        session.results().cloned()
    } else {
        session.deduped_results()
    }
    .ok_or_else(|| miette::miette!("no result files loaded"))?;

    let values = table.column_numeric(variable);
    let histogram =
        compute_histogram(&values, lsl, usl, bins).map_err(|e| miette::miette!("{}", e))?;

    Ok(PreparedPlot {
        variable: variable.to_string(),
        usl,
        lsl,
        display: display_range(usl, lsl),
        histogram,
        samples: values.len(),
    })
}

/// Render a prepared plot for the terminal.
pub(crate) fn render_plot_text(
    plot: &PreparedPlot,
    marker: Option<(f64, &str)>,
    braille: bool,
) -> String {
    if braille {
        viz::render_braille(
            &plot.variable,
            &plot.histogram,
            plot.lsl,
            plot.usl,
            plot.display,
            marker,
        )
    } else {
        viz::render_histogram(
            &plot.variable,
            &plot.histogram,
            plot.lsl,
            plot.usl,
            plot.display,
            marker,
        )
    }
}

#[derive(Serialize)]
struct PlotOutput<'a> {
    variable: &'a str,
    usl: f64,
    lsl: f64,
    display_range: [f64; 2],
    bins: usize,
    samples: usize,
    counted: u64,
    edges: &'a [f64],
    counts: &'a [u64],
    densities: &'a [f64],
}

pub fn run(args: PlotArgs, global: &GlobalOpts) -> Result<()> {
    let session = Session::new()
        .with_spec(&args.spec)
        .map_err(|e| miette::miette!("{}", e))?
        .with_results(&args.results)
        .map_err(|e| miette::miette!("{}", e))?;

    let plot = prepare_plot(&session, &args.var, args.bins, args.raw)?;
    let hist = &plot.histogram;

    match effective_format(global.output, false) {
        OutputFormat::Json => {
            let out = PlotOutput {
                variable: &plot.variable,
                usl: plot.usl,
                lsl: plot.lsl,
                display_range: [plot.display.0, plot.display.1],
                bins: hist.bin_count(),
                samples: plot.samples,
                counted: hist.counted(),
                edges: &hist.edges,
                counts: &hist.counts,
                densities: &hist.densities,
            };
            println!("{}", serde_json::to_string_pretty(&out).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("bin,lower_edge,upper_edge,count,density");
            for i in 0..hist.bin_count() {
                println!(
                    "{},{},{},{},{}",
                    i,
                    hist.edges[i],
                    hist.edges[i + 1],
                    hist.counts[i],
                    hist.densities[i]
                );
            }
        }
        OutputFormat::Tsv => {
            println!("bin\tlower_edge\tupper_edge\tcount\tdensity");
            for i in 0..hist.bin_count() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    i,
                    hist.edges[i],
                    hist.edges[i + 1],
                    hist.counts[i],
                    hist.densities[i]
                );
            }
        }
        OutputFormat::Auto | OutputFormat::Table => {
            println!("{}", render_plot_text(&plot, None, args.braille));
        }
    }

    Ok(())
}
