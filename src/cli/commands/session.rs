//! `spechist session` command - interactive variable selection and search
//!
//! Mirrors the desktop workflow: pick a variable to plot, then search
//! serial numbers against the current plot. A failed plot or search is
//! reported and the loop continues with the previous state intact.

use std::path::PathBuf;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::viz;
use crate::cli::GlobalOpts;
use crate::core::{locate, present_record, Session};

use super::plot::{prepare_plot, render_plot_text};

#[derive(clap::Args, Debug)]
pub struct SessionArgs {
    /// Spec file (CSV with "Test Names", USL and LSL columns)
    #[arg(long, short = 's')]
    pub spec: PathBuf,

    /// Result files (CSV with a DUT_SN column), concatenated in order
    #[arg(long, short = 'r', required = true, num_args = 1..)]
    pub results: Vec<PathBuf>,

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

pub fn run(args: SessionArgs, _global: &GlobalOpts) -> Result<()> {
    // initial loads are fatal: there is no prior state to fall back to
    let session = Session::new()
        .with_spec(&args.spec)
        .map_err(|e| miette::miette!("{}", e))?
        .with_results(&args.results)
        .map_err(|e| miette::miette!("{}", e))?;

    let variables = match session.spec() {
        Some(spec) => spec.variables(),
        None => Vec::new(),
    };
    if variables.is_empty() {
        return Err(miette::miette!(
            "no V_/I_ variables found in {}",
            args.spec.display()
        ));
    }

    let theme = ColorfulTheme::default();
    let mut items = variables.clone();
    items.push("(quit)".to_string());

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Select a test variable")
            .items(&items)
            .default(0)
            .interact()
            .into_diagnostic()?;
        if choice == variables.len() {
            break;
        }
        let variable = &variables[choice];

        let plot = match prepare_plot(&session, variable, args.bins, args.raw) {
            Ok(plot) => plot,
            Err(e) => {
                // recoverable: report and pick another variable
                eprintln!("{}", style(e.to_string()).red());
                continue;
            }
        };
        println!("{}", render_plot_text(&plot, None, args.braille));

        let Some(raw_results) = session.results() else {
            break;
        };

        loop {
            let input: String = Input::with_theme(&theme)
                .with_prompt("Search DUT_SN (blank to choose another variable)")
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?;
            let key = input.trim();
            if key.is_empty() {
                break;
            }

            // each search replaces the previous marker
            match locate(raw_results, variable, key) {
                Ok(point) => {
                    let marker = point.value.map(|v| (v, key));
                    println!("{}", render_plot_text(&plot, marker, args.braille));
                    if point.value.is_none() {
                        println!(
                            "{}",
                            style(format!(
                                "unit {} has no {} measurement; marker cleared",
                                key, variable
                            ))
                            .yellow()
                        );
                    }
                    println!("{}", viz::render_record_table(&present_record(raw_results, point.row)));
                }
                Err(e) => {
                    // marker and record table are cleared on a failed search
                    println!("{}", render_plot_text(&plot, None, args.braille));
                    println!("{}", style(e.to_string()).red());
                }
            }
        }
    }

    Ok(())
}
