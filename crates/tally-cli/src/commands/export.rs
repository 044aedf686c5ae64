//! Export command implementation

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tally_core::{export_expenses, ExportFormat};

use super::open_ledger;

pub fn cmd_export(file: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow!(e))?;
    let (_, store) = open_ledger(file);

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let count = export_expenses(&store, format, out)?;
            println!("✅ Exported {} expenses to {}", count, path.display());
        }
        None => {
            export_expenses(&store, format, io::stdout().lock())?;
        }
    }
    Ok(())
}
