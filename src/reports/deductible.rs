//! Deductible Spending Report
//!
//! Wraps the deductible percentage analysis with the per-category breakdown
//! behind it, for terminal display and CSV export.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{EngineError, EngineResult};
use crate::models::{round2, CategoryRecord};
use crate::services::deductible::{self, DeductibleSummary};

/// One valid analytics row and its share of total spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// Category name
    pub name: String,
    /// Spending in this category
    pub amount: f64,
    /// Percentage of total spending, rounded to two places
    pub percentage: f64,
}

/// Deductible Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct DeductibleReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Top category and residual shares
    pub summary: DeductibleSummary,
    /// Total of all valid rows
    pub total_spending: f64,
    /// Valid rows, largest first
    pub categories: Vec<CategoryShare>,
    /// Rows dropped for a blank category or non-numeric amount
    pub dropped_count: usize,
}

impl DeductibleReport {
    /// Generate a report from raw analytics rows
    pub fn generate(expenses: &[CategoryRecord]) -> Self {
        let summary = deductible::analyze(expenses);
        let mut valid = deductible::valid_expenses(expenses);
        let dropped_count = expenses.len() - valid.len();

        let total_spending: f64 = valid.iter().map(|(_, amount)| amount).sum();
        valid.sort_by(|a, b| b.1.total_cmp(&a.1));

        let categories = valid
            .into_iter()
            .map(|(name, amount)| CategoryShare {
                name: name.to_string(),
                amount,
                percentage: if total_spending == 0.0 {
                    0.0
                } else {
                    round2(amount / total_spending * 100.0)
                },
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            summary,
            total_spending,
            categories,
            dropped_count,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Deductible Spending Report ({})\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Spending: {:.2}\n", self.total_spending));
        output.push_str(&format!(
            "Top Category: {} ({:.2}%)\n",
            self.summary.top_category.name, self.summary.top_category.percentage
        ));
        output.push_str(&format!(
            "Utilities: {:.2}%\n\n",
            self.summary.utilities.percentage
        ));

        if self.categories.is_empty() {
            output.push_str("No valid category analytics.\n");
        } else {
            output.push_str(&format!("{:<35} {:>12} {:>8}\n", "Category", "Amount", "%"));
            output.push_str(&"-".repeat(60));
            output.push('\n');

            for share in &self.categories {
                output.push_str(&format!(
                    "{:<35} {:>12.2} {:>7.2}%\n",
                    share.name, share.amount, share.percentage
                ));
            }
        }

        if self.dropped_count > 0 {
            output.push_str(&format!(
                "\n{} row(s) skipped (blank category or non-numeric amount)\n",
                self.dropped_count
            ));
        }

        output
    }

    /// Export the per-category breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> EngineResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Category", "Amount", "Percentage"])?;
        for share in &self.categories {
            csv_writer.write_record([
                share.name.clone(),
                format!("{:.2}", share.amount),
                format!("{:.2}", share.percentage),
            ])?;
        }
        csv_writer.write_record([
            "TOTAL".to_string(),
            format!("{:.2}", self.total_spending),
            if self.categories.is_empty() {
                "0.00".to_string()
            } else {
                "100.00".to_string()
            },
        ])?;

        csv_writer
            .flush()
            .map_err(|e| EngineError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new("Meals", 100.0),
            CategoryRecord::new("Travel", "300"),
            CategoryRecord::new("", 50.0),
            CategoryRecord::new("Office", "n/a"),
        ]
    }

    #[test]
    fn test_generate() {
        let report = DeductibleReport::generate(&rows());

        assert_eq!(report.total_spending, 400.0);
        assert_eq!(report.dropped_count, 2);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].name, "Travel");
        assert_eq!(report.categories[0].percentage, 75.0);
        assert_eq!(report.categories[1].percentage, 25.0);
        assert_eq!(report.summary.top_category.name, "Travel");
        assert_eq!(report.summary.utilities.percentage, 25.0);
    }

    #[test]
    fn test_generate_empty() {
        let report = DeductibleReport::generate(&[]);
        assert!(report.summary.is_empty());
        assert!(report.categories.is_empty());
        assert!(report.format_terminal().contains("No valid category analytics."));
    }

    #[test]
    fn test_format_terminal() {
        let report = DeductibleReport::generate(&rows());
        let output = report.format_terminal();

        assert!(output.contains("Total Spending: 400.00"));
        assert!(output.contains("Top Category: Travel (75.00%)"));
        assert!(output.contains("Utilities: 25.00%"));
        assert!(output.contains("2 row(s) skipped"));
    }

    #[test]
    fn test_export_csv() {
        let report = DeductibleReport::generate(&rows());
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Category,Amount,Percentage");
        assert_eq!(lines[1], "Travel,300.00,75.00");
        assert_eq!(lines[2], "Meals,100.00,25.00");
        assert_eq!(lines[3], "TOTAL,400.00,100.00");
    }
}
