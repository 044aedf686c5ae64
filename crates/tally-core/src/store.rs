//! In-memory expense store
//!
//! Owns the ordered expense list and the next-identifier counter. All
//! mutation goes through [`ExpenseStore::add`]; recorded expenses are never
//! updated or deleted. Identifiers are unique and strictly increasing in
//! assignment order, and the counter stays greater than every existing id.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Expense;

/// Persisted shape of the store: the full expense list plus the counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub expenses: Vec<Expense>,
    pub next_id: u64,
}

/// The in-memory expense collection and identifier-assignment state
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store with the counter at 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from a persisted snapshot.
    ///
    /// A counter that is not greater than every existing id (a hand-edited
    /// ledger, for instance) is clamped up to `max(id) + 1` so new expenses
    /// can never collide with recorded ones.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let max_id = snapshot.expenses.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            expenses: snapshot.expenses,
            next_id: snapshot.next_id.max(max_id + 1),
        }
    }

    /// Clone the store state into its persisted shape
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            expenses: self.expenses.clone(),
            next_id: self.next_id,
        }
    }

    /// Record a new expense and return it.
    ///
    /// The CLI rejects malformed numeric input before it gets here; the
    /// store still re-validates the amount as a contract. On rejection
    /// nothing changes: no expense is appended and no id is consumed.
    pub fn add(&mut self, description: &str, amount: f64, category: &str) -> Result<Expense> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        let expense = Expense {
            id: self.next_id,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date: Utc::now(),
        };
        self.expenses.push(expense.clone());
        self.next_id += 1;
        Ok(expense)
    }

    /// All expenses in insertion order; empty is valid, not an error
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses whose category matches `name` case-insensitively
    pub fn by_category(&self, name: &str) -> Vec<&Expense> {
        let needle = name.to_lowercase();
        self.expenses
            .iter()
            .filter(|e| e.category.to_lowercase() == needle)
            .collect()
    }

    /// Summed amount per category label, in a single pass.
    ///
    /// Grouping is by the exact label; the BTreeMap gives the
    /// sorted-by-name iteration order the display relies on.
    pub fn category_totals(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Sum of all amounts; 0 for an empty store
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Mean expense amount. Errors on an empty store; callers guard.
    pub fn average(&self) -> Result<f64> {
        if self.expenses.is_empty() {
            return Err(Error::EmptyStore);
        }
        Ok(self.total() / self.expenses.len() as f64)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
