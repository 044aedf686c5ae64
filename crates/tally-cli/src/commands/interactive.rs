//! Interactive menu mode
//!
//! The numbered menu the tool presents when invoked with no subcommand.
//! Mutations are saved as they happen, and the ledger is saved once more
//! on exit.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{ExpenseStore, Storage};

use super::{expenses, open_ledger, reports};

pub fn cmd_interactive(file: &Path) -> Result<()> {
    let (storage, mut store) = open_ledger(file);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== Personal Expense Tracker ===");
        println!("1. Add expense");
        println!("2. List all expenses");
        println!("3. List expenses by category");
        println!("4. Show summary");
        println!("5. Show spending chart");
        println!("6. Exit");

        let Some(choice) = prompt(&mut lines, "Choose an option: ")? else {
            break; // closed stdin counts as exit
        };

        match choice.trim() {
            "1" => add_expense(&storage, &mut store, &mut lines)?,
            "2" => expenses::render_all(&store),
            "3" => {
                if let Some(name) = prompt(&mut lines, "Enter category to filter: ")? {
                    expenses::render_category(&store, name.trim());
                }
            }
            "4" => reports::render_summary(&store),
            "5" => reports::render_chart(&store),
            "6" => break,
            _ => println!("Invalid option. Please try again."),
        }
    }

    storage
        .save(&store)
        .with_context(|| format!("Failed to save ledger {}", storage.path().display()))?;
    println!("Goodbye!");
    Ok(())
}

/// Prompt for one expense and record it.
///
/// Bad input aborts the operation with a message and no state change; the
/// menu keeps running either way.
fn add_expense(
    storage: &Storage,
    store: &mut ExpenseStore,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let Some(amount_raw) = prompt(lines, "Enter amount: ")? else {
        return Ok(());
    };
    let amount: f64 = match amount_raw.trim().parse() {
        Ok(amount) => amount,
        Err(_) => {
            println!("Invalid amount: {}", amount_raw.trim());
            return Ok(());
        }
    };

    let Some(category) = prompt(lines, "Enter category: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(lines, "Enter description: ")? else {
        return Ok(());
    };

    if let Err(e) =
        expenses::record_expense(storage, store, amount, category.trim(), description.trim())
    {
        println!("⚠️  {}", e);
    }
    Ok(())
}

/// Print a prompt and read one line; `None` means stdin was closed
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
