//! Tally CLI - Personal expense tracker
//!
//! Usage:
//!   tally                     Interactive menu over the ledger
//!   tally add --amount 12.50 --category Food --description "Lunch"
//!   tally list [--category Food]
//!   tally summary             Totals and per-category breakdown
//!   tally chart               Proportional spending chart
//!   tally export --format csv Export the recorded expenses

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        None => commands::cmd_interactive(&cli.file),
        Some(Commands::Add {
            amount,
            category,
            description,
        }) => commands::cmd_add(&cli.file, amount, &category, &description),
        Some(Commands::List { category }) => commands::cmd_list(&cli.file, category.as_deref()),
        Some(Commands::Summary) => commands::cmd_summary(&cli.file),
        Some(Commands::Chart) => commands::cmd_chart(&cli.file),
        Some(Commands::Export { format, output }) => {
            commands::cmd_export(&cli.file, &format, output.as_deref())
        }
    }
}
