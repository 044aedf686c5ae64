//! Expense add/list command implementations

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tally_core::{ExpenseStore, Storage};

use super::{open_ledger, truncate};

pub fn cmd_add(file: &Path, amount: f64, category: &str, description: &str) -> Result<()> {
    let (storage, mut store) = open_ledger(file);
    record_expense(&storage, &mut store, amount, category, description)
}

/// Add one expense and make it durable before reporting success
pub(crate) fn record_expense(
    storage: &Storage,
    store: &mut ExpenseStore,
    amount: f64,
    category: &str,
    description: &str,
) -> Result<()> {
    let expense = store.add(description, amount, category)?;
    storage
        .save(store)
        .with_context(|| format!("Failed to save ledger {}", storage.path().display()))?;

    println!(
        "✅ Recorded expense #{}: ${:.2} ({})",
        expense.id, expense.amount, expense.category
    );
    Ok(())
}

pub fn cmd_list(file: &Path, category: Option<&str>) -> Result<()> {
    let (_, store) = open_ledger(file);
    match category {
        Some(name) => render_category(&store, name),
        None => render_all(&store),
    }
    Ok(())
}

/// Render every recorded expense as a table, in insertion order
pub(crate) fn render_all(store: &ExpenseStore) {
    println!();
    println!("💸 Recorded Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    if store.is_empty() {
        println!("   No expenses recorded yet.");
        return;
    }

    println!(
        "   {:>4} │ {:>10} │ {:15} │ {:25} │ {:10}",
        "ID", "Amount", "Category", "Description", "Date"
    );
    println!("   ─────┼────────────┼─────────────────┼───────────────────────────┼───────────");
    for expense in store.all() {
        println!(
            "   {:>4} │ {:>10.2} │ {:15} │ {:25} │ {:10}",
            expense.id,
            expense.amount,
            truncate(&expense.category, 15),
            truncate(&expense.description, 25),
            expense.date.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        );
    }
    println!();
    println!("   {} expenses, ${:.2} total", store.len(), store.total());
}

/// Render the expenses matching one category, with the category total
pub(crate) fn render_category(store: &ExpenseStore, name: &str) {
    let matches = store.by_category(name);

    println!();
    println!("💸 Expenses in '{}'", name);
    println!("   ─────────────────────────────────────────────────────────────");

    if matches.is_empty() {
        println!("   No expenses found in category: {}", name);
        return;
    }

    println!(
        "   {:>4} │ {:>10} │ {:25} │ {:10}",
        "ID", "Amount", "Description", "Date"
    );
    println!("   ─────┼────────────┼───────────────────────────┼───────────");
    let mut total = 0.0;
    for expense in &matches {
        total += expense.amount;
        println!(
            "   {:>4} │ {:>10.2} │ {:25} │ {:10}",
            expense.id,
            expense.amount,
            truncate(&expense.description, 25),
            expense.date.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        );
    }
    println!();
    println!("   Total spent in {}: ${:.2}", name, total);
}
