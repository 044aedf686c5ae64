//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `expenses` - Add/list commands and expense table rendering
//! - `export` - Expense export command
//! - `interactive` - Numbered menu loop over stdin
//! - `reports` - Summary and chart commands

pub mod expenses;
pub mod export;
pub mod interactive;
pub mod reports;

// Re-export command functions for main.rs
pub use expenses::*;
pub use export::*;
pub use interactive::*;
pub use reports::*;

use std::path::Path;

use tally_core::{ExpenseStore, Storage};

/// Open the ledger at `path`, surfacing any load warning on stderr.
///
/// A missing or unusable ledger never aborts startup; it degrades to an
/// empty store.
pub fn open_ledger(path: &Path) -> (Storage, ExpenseStore) {
    let storage = Storage::new(path);
    let loaded = storage.load();
    if let Some(warning) = loaded.warning {
        eprintln!("⚠️  {}", warning);
    }
    (storage, loaded.store)
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
