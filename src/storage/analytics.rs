//! Analytics input loading
//!
//! Category analytics arrive as a JSON array of `CategoryRecord` or as a CSV
//! export with a `category,amount[,totalItemByCategory]` header. CSV amounts
//! are kept as text so the engine's own coercion decides what is numeric.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CategoryRecord, RawAmount};

use super::file_io::{open_input, read_input};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    category: String,
    #[serde(default)]
    amount: String,
    #[serde(rename = "totalItemByCategory", default)]
    total_item_by_category: Option<String>,
}

impl From<CsvRow> for CategoryRecord {
    fn from(row: CsvRow) -> Self {
        let amount = (!row.amount.is_empty()).then(|| RawAmount::Text(row.amount));
        let total_item_by_category = row
            .total_item_by_category
            .and_then(|count| count.trim().parse().ok());

        CategoryRecord {
            category: row.category,
            amount,
            total_item_by_category,
        }
    }
}

/// Read analytics rows from CSV with a header line
pub fn parse_analytics_csv<R: Read>(reader: R) -> EngineResult<Vec<CategoryRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into());
    }

    Ok(records)
}

/// Load analytics from a `.csv` or JSON file
pub fn load_analytics<P: AsRef<Path>>(path: P) -> EngineResult<Vec<CategoryRecord>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let records = if is_csv {
        parse_analytics_csv(open_input(path)?)?
    } else {
        read_input(path)?
    };

    debug!(path = %path.display(), rows = records.len(), "loaded analytics");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_csv() {
        let data = "category,amount,totalItemByCategory\n\
                    Travel,300,2\n\
                    \"Office, Supplies\",45.50,\n\
                    Meals,abc,1\n";

        let records = parse_analytics_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, "Travel");
        assert_eq!(records[0].amount_value(), Some(300.0));
        assert_eq!(records[0].total_item_by_category, Some(2));
        assert_eq!(records[1].category, "Office, Supplies");
        assert_eq!(records[1].amount_value(), Some(45.5));
        assert_eq!(records[1].total_item_by_category, None);
        assert_eq!(records[2].amount_value(), None);
    }

    #[test]
    fn test_parse_csv_without_count_column() {
        let data = "category,amount\nRent,1200\n,50\n";
        let records = parse_analytics_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(!records[1].has_category());
    }

    #[test]
    fn test_load_json_and_csv() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("analytics.json");
        std::fs::write(
            &json_path,
            r#"[{"category": "Travel", "amount": 300}, {"category": "Meals", "amount": "100"}]"#,
        )
        .unwrap();
        let records = load_analytics(&json_path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].amount_value(), Some(100.0));

        let csv_path = temp_dir.path().join("analytics.CSV");
        std::fs::write(&csv_path, "category,amount\nTravel,300\n").unwrap();
        let records = load_analytics(&csv_path).unwrap();
        assert_eq!(records[0].category, "Travel");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_analytics(temp_dir.path().join("missing.csv")).unwrap_err();
        assert!(err.is_not_found());
    }
}
