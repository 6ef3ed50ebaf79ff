//! Category display formatting
//!
//! Formats aggregated category groups and the ceiling table as terminal
//! tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CategoryGroup;
use crate::services::ThresholdCapper;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Capped")]
    capped: &'static str,
}

#[derive(Tabled)]
struct CeilingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Ceiling")]
    ceiling: String,
}

/// Format aggregated groups as one table, with a total row per group
pub fn format_group_table(groups: &[CategoryGroup]) -> String {
    if groups.is_empty() {
        return "No category groups.".to_string();
    }

    let mut rows = Vec::new();
    for group in groups {
        for item in &group.items {
            rows.push(ItemRow {
                group: group.name.clone(),
                category: item.name.clone(),
                amount: format!("{:.2}", item.amount),
                original: format!("{:.2}", item.original_amount),
                capped: if item.is_capped() { "yes" } else { "" },
            });
        }

        rows.push(ItemRow {
            group: group.name.clone(),
            category: "Group Total".to_string(),
            amount: format!("{:.2}", group.total_amount),
            original: format!("{:.2}", group.total_original_amount),
            capped: "",
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format the ceiling table
pub fn format_threshold_table(capper: &ThresholdCapper) -> String {
    if capper.is_empty() {
        return "No deduction ceilings configured.".to_string();
    }

    let rows = capper.iter().map(|(category, ceiling)| CeilingRow {
        category: category.to_string(),
        ceiling: format!("{:.2}", ceiling),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryItem;

    #[test]
    fn test_group_table() {
        let groups = vec![CategoryGroup::with_items(
            "b",
            "Business",
            vec![
                CategoryItem::with_amounts("Furniture and Equipment", 15_000.0, 18_000.0),
                CategoryItem::with_amounts("Travel", 120.5, 120.5),
            ],
        )];

        let output = format_group_table(&groups);
        assert!(output.contains("Furniture and Equipment"));
        assert!(output.contains("18000.00"));
        assert!(output.contains("yes"));
        assert!(output.contains("Group Total"));
        assert!(output.contains("15120.50"));
    }

    #[test]
    fn test_empty_groups() {
        assert_eq!(format_group_table(&[]), "No category groups.");
    }

    #[test]
    fn test_threshold_table() {
        let output = format_threshold_table(&ThresholdCapper::default());
        assert!(output.contains("Computer Hardware"));
        assert!(output.contains("15000.00"));

        let output = format_threshold_table(&ThresholdCapper::empty());
        assert_eq!(output, "No deduction ceilings configured.");
    }
}
