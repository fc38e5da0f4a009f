//! `spechist vars` command - list selectable test variables

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::escape_csv;
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{load_spec, SpecTable};

#[derive(clap::Args, Debug)]
pub struct VarsArgs {
    /// Spec file (CSV with "Test Names", USL and LSL columns)
    #[arg(long, short = 's')]
    pub spec: PathBuf,

    /// Only print the number of selectable variables
    #[arg(long)]
    pub count: bool,

    /// Include the resolved USL/LSL for each variable
    #[arg(long, short = 'l')]
    pub limits: bool,
}

#[derive(Serialize)]
struct VarEntry {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    usl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lsl: Option<f64>,
}

fn entries(spec: &SpecTable, with_limits: bool) -> Vec<VarEntry> {
    spec.variables()
        .into_iter()
        .map(|name| {
            let limits = if with_limits {
                spec.resolve_limits(&name).ok()
            } else {
                None
            };
            VarEntry {
                usl: limits.and_then(|l| l.usl),
                lsl: limits.and_then(|l| l.lsl),
                name,
            }
        })
        .collect()
}

fn fmt_limit(limit: Option<f64>) -> String {
    limit.map(|v| v.to_string()).unwrap_or_default()
}

pub fn run(args: VarsArgs, global: &GlobalOpts) -> Result<()> {
    let spec = load_spec(&args.spec).map_err(|e| miette::miette!("{}", e))?;
    let format = effective_format(global.output, true);
    // the table view always shows limit columns
    let vars = entries(&spec, args.limits || format == OutputFormat::Table);

    if args.count {
        println!("{}", vars.len());
        return Ok(());
    }

    if vars.is_empty() {
        println!("No selectable variables found.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&vars).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            if args.limits {
                println!("name,usl,lsl");
                for entry in &vars {
                    println!(
                        "{},{},{}",
                        escape_csv(&entry.name),
                        fmt_limit(entry.usl),
                        fmt_limit(entry.lsl)
                    );
                }
            } else {
                println!("name");
                for entry in &vars {
                    println!("{}", escape_csv(&entry.name));
                }
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<24} {:>12} {:>12}",
                style("VARIABLE").bold(),
                style("USL").bold(),
                style("LSL").bold()
            );
            println!("{}", "-".repeat(50));
            for entry in &vars {
                println!(
                    "{:<24} {:>12} {:>12}",
                    style(&entry.name).cyan(),
                    fmt_limit(entry.usl),
                    fmt_limit(entry.lsl)
                );
            }
            println!();
            println!("{} variable(s) found", vars.len());
        }
        OutputFormat::Auto | OutputFormat::Tsv => {
            for entry in &vars {
                if args.limits {
                    println!(
                        "{}\t{}\t{}",
                        entry.name,
                        fmt_limit(entry.usl),
                        fmt_limit(entry.lsl)
                    );
                } else {
                    println!("{}", entry.name);
                }
            }
        }
    }

    Ok(())
}
