//! Summary and chart command implementations

use std::path::Path;

use anyhow::Result;
use tally_core::{report, ExpenseStore};

use super::{open_ledger, truncate};

pub fn cmd_summary(file: &Path) -> Result<()> {
    let (_, store) = open_ledger(file);
    render_summary(&store);
    Ok(())
}

/// Render totals, the average, and the per-category breakdown
pub(crate) fn render_summary(store: &ExpenseStore) {
    println!();
    println!("📊 Expense Summary");
    println!("   ─────────────────────────────────────────────────────────────");

    if store.is_empty() {
        println!("   No expenses recorded yet.");
        return;
    }

    let summary = report::spending_summary(store);
    println!("   Expenses: {}", summary.expense_count);
    println!("   Total:    ${:.2}", summary.total);
    if let Ok(average) = store.average() {
        println!("   Average:  ${:.2}", average);
    }
    println!();
    println!(
        "   {:20} │ {:>10} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    );
    println!("   ─────────────────────┼────────────┼────────┼───────");
    for cat in &summary.categories {
        println!(
            "   {:20} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            truncate(&cat.category, 20),
            cat.amount,
            cat.percentage,
            cat.expense_count
        );
    }
}

pub fn cmd_chart(file: &Path) -> Result<()> {
    let (_, store) = open_ledger(file);
    render_chart(&store);
    Ok(())
}

/// Render the proportional per-category spending chart
pub(crate) fn render_chart(store: &ExpenseStore) {
    println!();
    println!("📊 Spending by Category");

    if store.is_empty() {
        println!("   No expenses to visualize.");
        return;
    }

    println!(
        "   (each █ is {:.0}% of total spending)",
        report::BAR_UNIT_PCT
    );
    println!();
    for entry in report::spending_chart(store) {
        println!(
            "   {:15} {} {:.1}%",
            truncate(&entry.category, 15),
            "█".repeat(entry.bar_len),
            entry.percentage
        );
    }
}
