//! Expense export
//!
//! Writes the recorded expenses in insertion order, either as CSV (header
//! row plus one record per expense) or as a pretty-printed JSON list.

use std::io::Write;

use crate::error::Result;
use crate::store::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (use csv or json)", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Write all expenses to `writer`, returning the record count
pub fn export_expenses<W: Write>(
    store: &ExpenseStore,
    format: ExportFormat,
    writer: W,
) -> Result<usize> {
    match format {
        ExportFormat::Csv => export_csv(store, writer),
        ExportFormat::Json => export_json(store, writer),
    }
}

fn export_csv<W: Write>(store: &ExpenseStore, writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "amount", "category", "description", "date"])?;
    for expense in store.all() {
        wtr.write_record([
            expense.id.to_string(),
            format!("{:.2}", expense.amount),
            expense.category.clone(),
            expense.description.clone(),
            expense.date.to_rfc3339(),
        ])?;
    }
    wtr.flush()?;
    Ok(store.len())
}

fn export_json<W: Write>(store: &ExpenseStore, mut writer: W) -> Result<usize> {
    serde_json::to_writer_pretty(&mut writer, store.all())?;
    writeln!(writer)?;
    Ok(store.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add("Groceries", 45.50, "Food").unwrap();
        store.add("Bus pass", 25.00, "Transport").unwrap();
        store
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_csv_export_header_and_rows() {
        let store = sample_store();
        let mut out = Vec::new();
        let count = export_expenses(&store, ExportFormat::Csv, &mut out).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,amount,category,description,date");
        assert!(lines[1].starts_with("1,45.50,Food,Groceries,"));
        assert!(lines[2].starts_with("2,25.00,Transport,Bus pass,"));
    }

    #[test]
    fn test_csv_export_quotes_embedded_commas() {
        let mut store = ExpenseStore::new();
        store.add("Eggs, milk, bread", 12.00, "Food").unwrap();

        let mut out = Vec::new();
        export_expenses(&store, ExportFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Eggs, milk, bread\""));
    }

    #[test]
    fn test_json_export_is_parseable_list() {
        let store = sample_store();
        let mut out = Vec::new();
        let count = export_expenses(&store, ExportFormat::Json, &mut out).unwrap();
        assert_eq!(count, 2);

        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["category"], "Food");
        assert_eq!(parsed[1]["id"], 2);
    }

    #[test]
    fn test_empty_store_exports_cleanly() {
        let store = ExpenseStore::new();

        let mut csv_out = Vec::new();
        assert_eq!(
            export_expenses(&store, ExportFormat::Csv, &mut csv_out).unwrap(),
            0
        );
        let text = String::from_utf8(csv_out).unwrap();
        assert_eq!(text.lines().count(), 1); // header only

        let mut json_out = Vec::new();
        assert_eq!(
            export_expenses(&store, ExportFormat::Json, &mut json_out).unwrap(),
            0
        );
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&json_out).unwrap();
        assert!(parsed.is_empty());
    }
}
