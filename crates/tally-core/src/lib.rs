//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - In-memory expense store with aggregation operations
//! - JSON ledger persistence
//! - Spending summary and chart derivations
//! - CSV/JSON expense export

pub mod error;
pub mod export;
pub mod models;
pub mod report;
pub mod storage;
pub mod store;

pub use error::{Error, Result};
pub use export::{export_expenses, ExportFormat};
pub use models::{CategorySpending, ChartEntry, Expense, SpendingSummary};
pub use report::{spending_chart, spending_summary, BAR_UNIT_PCT};
pub use storage::{LoadResult, Storage};
pub use store::{ExpenseStore, StoreSnapshot};
