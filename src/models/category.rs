//! Deduction category models
//!
//! `CategoryRecord` is one row of raw spending analytics. `CategoryGroup` is a
//! product-defined bucket of deduction categories; the aggregator fills its
//! items from the analytics and returns the same shape with totals.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::amount::RawAmount;
use super::ids::GroupId;

/// One analytics row per expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category name as recorded on the expenses
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,

    /// Summed amount, either a number or a decimal string
    #[serde(default)]
    pub amount: Option<RawAmount>,

    /// Number of expense items summed into this row
    #[serde(
        rename = "totalItemByCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_item_by_category: Option<u64>,
}

impl CategoryRecord {
    /// Create a new analytics row
    pub fn new(category: impl Into<String>, amount: impl Into<RawAmount>) -> Self {
        Self {
            category: category.into(),
            amount: Some(amount.into()),
            total_item_by_category: None,
        }
    }

    /// Attach the item count
    pub fn with_item_count(mut self, count: u64) -> Self {
        self.total_item_by_category = Some(count);
        self
    }

    /// The amount coerced to a finite number, if it coerces
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_ref().and_then(RawAmount::value)
    }

    /// Whether the row names a category at all
    pub fn has_category(&self) -> bool {
        !self.category.trim().is_empty()
    }
}

/// A single deduction category inside a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// Canonical category name, matched exactly against analytics rows
    pub name: String,

    /// Deductible amount after capping
    #[serde(default)]
    pub amount: f64,

    /// Amount before capping
    #[serde(default)]
    pub original_amount: f64,

    /// Category whose ceiling applies, when different from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_category: Option<String>,

    /// Item count carried over from the matched analytics row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u64>,
}

/// A user-authored category; same shape as a predefined item
pub type CustomCategory = CategoryItem;

impl CategoryItem {
    /// Create a placeholder item with zero amounts
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: 0.0,
            original_amount: 0.0,
            reference_category: None,
            item_count: None,
        }
    }

    /// Create an item with both amounts set
    pub fn with_amounts(name: impl Into<String>, amount: f64, original_amount: f64) -> Self {
        let mut item = Self::new(name);
        item.amount = amount;
        item.original_amount = original_amount;
        item
    }

    /// Set the reference category used for ceiling lookups
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_category = Some(reference.into());
        self
    }

    /// The name used to look up a ceiling
    ///
    /// The reference category when set, otherwise the item's own name. Only
    /// one name is consulted: an item named after a capped category but
    /// referring to another one takes the other one's ceiling, if any.
    pub fn ceiling_key(&self) -> &str {
        self.reference_category.as_deref().unwrap_or(&self.name)
    }

    /// Whether capping reduced this item's amount
    pub fn is_capped(&self) -> bool {
        self.amount < self.original_amount
    }
}

impl fmt::Display for CategoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A predefined group of deduction categories with rolled-up totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Identifier from product configuration
    #[serde(default)]
    pub id: GroupId,

    /// Group name
    pub name: String,

    /// Categories in display order
    #[serde(default)]
    pub items: Vec<CategoryItem>,

    /// Sum of item amounts, rounded to cents
    #[serde(default)]
    pub total_amount: f64,

    /// Unrounded sum of original amounts
    #[serde(default)]
    pub total_original_amount: f64,
}

impl CategoryGroup {
    /// Create an empty group
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            total_amount: 0.0,
            total_original_amount: 0.0,
        }
    }

    /// Create a group with the given items and computed totals
    pub fn with_items(
        id: impl Into<GroupId>,
        name: impl Into<String>,
        items: Vec<CategoryItem>,
    ) -> Self {
        let mut group = Self::new(id, name);
        group.items = items;
        group.recompute_totals();
        group
    }

    /// Recompute `total_amount` and `total_original_amount` from the items
    pub fn recompute_totals(&mut self) {
        let total: f64 = self.items.iter().map(|i| i.amount).sum();
        self.total_amount = super::amount::round2(total);
        self.total_original_amount = self.items.iter().map(|i| i.original_amount).sum();
    }

    /// Find an item by exact name
    pub fn item(&self, name: &str) -> Option<&CategoryItem> {
        self.items.iter().find(|i| i.name == name)
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
