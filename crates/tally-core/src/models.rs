//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded expense
///
/// Field order matters: it is the stable order of the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    /// Non-negative; validated by the store on entry
    pub amount: f64,
    /// Free-text label used to group expenses for aggregation
    pub category: String,
    pub description: String,
    /// Stamped when the expense is recorded, immutable afterwards
    pub date: DateTime<Utc>,
}

/// Per-category spending with its share of the overall total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    /// Share of total spending, 0-100
    pub percentage: f64,
    pub expense_count: usize,
}

/// Spending summary across all recorded expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub expense_count: usize,
    pub total: f64,
    /// Sorted by category name for repeatable output
    pub categories: Vec<CategorySpending>,
}

/// One row of the proportional spending chart
#[derive(Debug, Clone)]
pub struct ChartEntry {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    /// Number of bar symbols to render; at least 1 for any non-zero share
    pub bar_len: usize,
}
