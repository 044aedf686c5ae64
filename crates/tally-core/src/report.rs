//! Spending summary and chart derivation
//!
//! Pure derivations over store output. Rendering is the CLI's job; this
//! module only computes amounts, shares and bar lengths.

use crate::models::{CategorySpending, ChartEntry, SpendingSummary};
use crate::store::ExpenseStore;

/// Percent of total spending represented by one chart symbol
pub const BAR_UNIT_PCT: f64 = 5.0;

/// Build the per-category spending summary, categories sorted by name.
///
/// Percentages are shares of the overall total, 0 when the total itself
/// is 0 (an all-zero-amount store must not divide by zero).
pub fn spending_summary(store: &ExpenseStore) -> SpendingSummary {
    let total = store.total();

    let categories = store
        .category_totals()
        .into_iter()
        .map(|(category, amount)| {
            let expense_count = store
                .all()
                .iter()
                .filter(|e| e.category == category)
                .count();
            CategorySpending {
                category,
                amount,
                percentage: share_pct(amount, total),
                expense_count,
            }
        })
        .collect();

    SpendingSummary {
        expense_count: store.len(),
        total,
        categories,
    }
}

/// Build proportional chart rows, one per category, sorted by name.
///
/// Bar length is one symbol per [`BAR_UNIT_PCT`] percent of total
/// spending, floored, with a minimum of one symbol for any category that
/// spent anything at all so no non-zero entry renders invisibly.
pub fn spending_chart(store: &ExpenseStore) -> Vec<ChartEntry> {
    let total = store.total();

    store
        .category_totals()
        .into_iter()
        .map(|(category, amount)| {
            let percentage = share_pct(amount, total);
            let mut bar_len = (percentage / BAR_UNIT_PCT).floor() as usize;
            if bar_len == 0 && percentage > 0.0 {
                bar_len = 1;
            }
            ChartEntry {
                category,
                amount,
                percentage,
                bar_len,
            }
        })
        .collect()
}

fn share_pct(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        (amount / total) * 100.0
    } else {
        0.0
    }
}
