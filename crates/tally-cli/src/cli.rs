//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track and summarize personal expenses
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(long, default_value = "expenses.json", global = true)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (non-negative)
        #[arg(short, long)]
        amount: f64,

        /// Category label (free text, e.g. "Food")
        #[arg(short, long)]
        category: String,

        /// What the money went to
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List recorded expenses
    List {
        /// Only expenses in this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show totals and the per-category breakdown
    Summary,

    /// Show the proportional spending chart
    Chart,

    /// Export expenses to CSV or JSON
    Export {
        /// Output format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
