//! Category aggregation service
//!
//! Fills the predefined deduction taxonomy from raw spending analytics,
//! applies legal ceilings, and rolls up group totals. One group, the custom
//! category group, can instead be replaced wholesale by the user's own
//! categories.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{CategoryGroup, CategoryItem, CategoryRecord, CustomCategory};

use super::threshold::ThresholdCapper;

/// Name of the group that user-authored categories replace
pub const DEFAULT_CUSTOM_GROUP_NAME: &str = "Custom Categories";

/// How a single group is aggregated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregationMode<'a> {
    /// Match items against analytics and apply ceilings
    Standard,
    /// Replace the group's items with custom categories, verbatim and uncapped
    CustomOverride(&'a [CustomCategory]),
}

/// Service for aggregating analytics into category groups
pub struct CategoryAggregator<'a> {
    capper: &'a ThresholdCapper,
    custom_group_name: &'a str,
}

impl<'a> CategoryAggregator<'a> {
    /// Create a new aggregator using the given ceiling table
    pub fn new(capper: &'a ThresholdCapper) -> Self {
        Self {
            capper,
            custom_group_name: DEFAULT_CUSTOM_GROUP_NAME,
        }
    }

    /// Use a different name for the custom category group
    pub fn with_custom_group_name(mut self, name: &'a str) -> Self {
        self.custom_group_name = name;
        self
    }

    /// Decide how a group is aggregated
    ///
    /// Only the custom category group, and only when the user has custom
    /// categories, takes the override path.
    pub fn mode_for<'c>(
        &self,
        group: &CategoryGroup,
        custom: &'c [CustomCategory],
    ) -> AggregationMode<'c> {
        if group.name == self.custom_group_name && !custom.is_empty() {
            AggregationMode::CustomOverride(custom)
        } else {
            AggregationMode::Standard
        }
    }

    /// Aggregate every group against the analytics
    ///
    /// Output groups follow input order. Analytics rows that match no item
    /// are ignored.
    pub fn aggregate(
        &self,
        groups: &[CategoryGroup],
        analytics: &[CategoryRecord],
        custom: &[CustomCategory],
    ) -> Vec<CategoryGroup> {
        let lookup = index_by_category(analytics);

        groups
            .iter()
            .map(|group| match self.mode_for(group, custom) {
                AggregationMode::Standard => self.aggregate_standard(group, &lookup),
                AggregationMode::CustomOverride(custom) => {
                    debug!(group = %group.name, count = custom.len(), "custom categories override group");
                    CategoryGroup::with_items(group.id.clone(), group.name.clone(), custom.to_vec())
                }
            })
            .collect()
    }

    fn aggregate_standard(
        &self,
        group: &CategoryGroup,
        lookup: &HashMap<&str, &CategoryRecord>,
    ) -> CategoryGroup {
        let items = group
            .items
            .iter()
            .map(|item| self.fill_item(item, lookup.get(item.name.as_str()).copied()))
            .collect();

        CategoryGroup::with_items(group.id.clone(), group.name.clone(), items)
    }

    fn fill_item(&self, item: &CategoryItem, record: Option<&CategoryRecord>) -> CategoryItem {
        let mut filled = item.clone();

        let Some(record) = record else {
            return filled;
        };

        let Some(raw) = record.amount_value() else {
            warn!(category = %record.category, amount = ?record.amount, "analytics amount is not numeric; keeping defaults");
            return filled;
        };

        filled.amount = self.capper.cap(item.ceiling_key(), raw);
        filled.original_amount = raw;
        if record.total_item_by_category.is_some() {
            filled.item_count = record.total_item_by_category;
        }

        filled
    }
}

/// Aggregate with the default ceilings and custom group name
pub fn aggregate(
    groups: &[CategoryGroup],
    analytics: &[CategoryRecord],
    custom: &[CustomCategory],
) -> Vec<CategoryGroup> {
    let capper = ThresholdCapper::default();
    CategoryAggregator::new(&capper).aggregate(groups, analytics, custom)
}

/// First analytics row per category name
fn index_by_category(analytics: &[CategoryRecord]) -> HashMap<&str, &CategoryRecord> {
    let mut lookup = HashMap::with_capacity(analytics.len());
    for record in analytics {
        lookup.entry(record.category.as_str()).or_insert(record);
    }
    lookup
}
