//! compatlint CLI: the `compatlint` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();

    match cli.command {
        Commands::Check {
            data,
            browsers,
            specs,
            config,
            filter,
            today,
            json,
        } => commands::check::run(commands::check::Args {
            data,
            browsers,
            specs,
            config,
            filter,
            today,
            json,
            verbose: cli.verbose,
        }),

        Commands::Rules { json } => commands::rules::run(json),
    }
}
