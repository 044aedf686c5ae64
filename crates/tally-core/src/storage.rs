//! JSON ledger persistence
//!
//! The full store state lives in a single human-readable JSON document
//! (`expenses.json` by default). Saves replace the file by writing to a
//! temporary file in the same directory and renaming it over the ledger,
//! so the document is always either the old or the new version.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::store::{ExpenseStore, StoreSnapshot};

/// Result of loading the ledger.
///
/// A missing file is a normal first run. A file that exists but cannot be
/// read or parsed degrades to an empty store; the warning carries the cause
/// so the caller decides whether to tell the user, rather than the failure
/// being masked here.
#[derive(Debug)]
pub struct LoadResult {
    pub store: ExpenseStore,
    pub warning: Option<String>,
}

/// JSON-document persistence for the expense store
pub struct Storage {
    ledger_path: PathBuf,
}

impl Storage {
    pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            ledger_path: ledger_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.ledger_path
    }

    /// Load the ledger, degrading to an empty store on a missing or
    /// unusable file. Never fails: startup should not abort over a bad
    /// ledger, only report it.
    pub fn load(&self) -> LoadResult {
        if !self.ledger_path.exists() {
            debug!("No ledger at {}, starting empty", self.ledger_path.display());
            return LoadResult {
                store: ExpenseStore::new(),
                warning: None,
            };
        }

        let raw = match fs::read_to_string(&self.ledger_path) {
            Ok(raw) => raw,
            Err(e) => return self.degrade(format!("could not be read: {}", e)),
        };

        match serde_json::from_str::<StoreSnapshot>(&raw) {
            Ok(snapshot) => {
                let store = ExpenseStore::from_snapshot(snapshot);
                debug!(
                    "Loaded {} expenses from {}",
                    store.len(),
                    self.ledger_path.display()
                );
                LoadResult {
                    store,
                    warning: None,
                }
            }
            Err(e) => self.degrade(format!("is not a valid ledger: {}", e)),
        }
    }

    /// Persist the full store state, replacing the ledger file.
    pub fn save(&self, store: &ExpenseStore) -> Result<()> {
        let json = serde_json::to_string_pretty(&store.snapshot())?;

        // The temp file must share the ledger's directory so the rename
        // stays on one filesystem and is atomic.
        let dir = match self.ledger_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
            Error::Storage(format!(
                "Failed to create temp file in {}: {}",
                dir.display(),
                e
            ))
        })?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.ledger_path).map_err(|e| {
            Error::Storage(format!(
                "Failed to replace {}: {}",
                self.ledger_path.display(),
                e
            ))
        })?;

        debug!(
            "Saved {} expenses to {}",
            store.len(),
            self.ledger_path.display()
        );
        Ok(())
    }

    fn degrade(&self, cause: String) -> LoadResult {
        let warning = format!(
            "Ledger {} {}; starting with an empty ledger",
            self.ledger_path.display(),
            cause
        );
        warn!("{}", warning);
        LoadResult {
            store: ExpenseStore::new(),
            warning: Some(warning),
        }
    }
}
