//! Deductible percentage analysis
//!
//! Splits total spending into the share of the single largest category and
//! the share of everything else (shown as "utilities").

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{round2, CategoryRecord};

/// Category name reported when there is nothing to analyze
pub const NO_CATEGORY: &str = "N/A";

/// The dominant category and its share of total spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub name: String,
    pub percentage: f64,
}

/// Share of total spending outside the top category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilitiesShare {
    pub percentage: f64,
}

/// Result of a deductible percentage analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductibleSummary {
    pub top_category: TopCategory,
    pub utilities: UtilitiesShare,
}

impl DeductibleSummary {
    /// The sentinel summary for empty or entirely invalid input
    pub fn empty() -> Self {
        Self {
            top_category: TopCategory {
                name: NO_CATEGORY.to_string(),
                percentage: 0.0,
            },
            utilities: UtilitiesShare { percentage: 0.0 },
        }
    }

    /// Whether this is the sentinel summary
    pub fn is_empty(&self) -> bool {
        self.top_category.name == NO_CATEGORY && self.top_category.percentage == 0.0
    }
}

/// Analytics rows that carry a category name and a numeric amount
///
/// Returns `(category, amount)` pairs in input order.
pub fn valid_expenses(expenses: &[CategoryRecord]) -> Vec<(&str, f64)> {
    expenses
        .iter()
        .filter_map(|record| {
            let amount = record.amount_value();
            if amount.is_none() || !record.has_category() {
                trace!(category = %record.category, amount = ?record.amount, "dropping invalid analytics row");
                return None;
            }
            amount.map(|amount| (record.category.as_str(), amount))
        })
        .collect()
}

/// Compute the top category share and the residual share
///
/// Invalid rows are dropped first. Ties on amount keep input order. When
/// every valid amount is zero both shares are reported as zero.
pub fn analyze(expenses: &[CategoryRecord]) -> DeductibleSummary {
    let mut valid = valid_expenses(expenses);
    if valid.is_empty() {
        return DeductibleSummary::empty();
    }

    let total: f64 = valid.iter().map(|(_, amount)| amount).sum();

    // stable sort keeps first-encountered order among equal amounts
    valid.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (top_name, top_amount) = valid[0];
    let rest: f64 = valid[1..].iter().map(|(_, amount)| amount).sum();

    let share = |amount: f64| {
        if total == 0.0 {
            0.0
        } else {
            round2(amount / total * 100.0)
        }
    };

    DeductibleSummary {
        top_category: TopCategory {
            name: top_name.to_string(),
            percentage: share(top_amount),
        },
        utilities: UtilitiesShare {
            percentage: share(rest),
        },
    }
}
