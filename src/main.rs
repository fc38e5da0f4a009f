use clap::Parser;
use miette::Result;
use spechist::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Vars(args) => spechist::cli::commands::vars::run(args, &cli.global),
        Commands::Plot(args) => spechist::cli::commands::plot::run(args, &cli.global),
        Commands::Locate(args) => spechist::cli::commands::locate::run(args, &cli.global),
        Commands::Session(args) => spechist::cli::commands::session::run(args, &cli.global),
    }
}
