//! Deduction ceilings
//!
//! Some deduction categories are capped by law. `ThresholdCapper` owns the
//! single table of ceilings; every capping decision in the engine goes
//! through it so the figures live in exactly one place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Category name for furniture and office equipment purchases
pub const FURNITURE_AND_EQUIPMENT: &str = "Furniture and Equipment";

/// Category name for computer hardware purchases
pub const COMPUTER_HARDWARE: &str = "Computer Hardware";

/// Default ceiling for both capped categories
pub const DEFAULT_CEILING: f64 = 15_000.0;

/// Lookup table from category name to deduction ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdCapper {
    ceilings: BTreeMap<String, f64>,
}

impl Default for ThresholdCapper {
    fn default() -> Self {
        Self::empty()
            .with_ceiling(FURNITURE_AND_EQUIPMENT, DEFAULT_CEILING)
            .with_ceiling(COMPUTER_HARDWARE, DEFAULT_CEILING)
    }
}

impl ThresholdCapper {
    /// A table with no ceilings; every amount passes through
    pub fn empty() -> Self {
        Self {
            ceilings: BTreeMap::new(),
        }
    }

    /// Add or replace a ceiling
    pub fn with_ceiling(mut self, category: impl Into<String>, ceiling: f64) -> Self {
        self.ceilings.insert(category.into(), ceiling);
        self
    }

    /// The ceiling for a category, if it has one
    pub fn ceiling(&self, category: &str) -> Option<f64> {
        self.ceilings.get(category).copied()
    }

    /// Whether a category is subject to a ceiling
    pub fn is_capped(&self, category: &str) -> bool {
        self.ceilings.contains_key(category)
    }

    /// Cap an amount against the category's ceiling
    ///
    /// Categories without a ceiling return `amount` unchanged.
    pub fn cap(&self, category: &str, amount: f64) -> f64 {
        match self.ceiling(category) {
            Some(ceiling) if amount > ceiling => {
                debug!(category, amount, ceiling, "amount capped at ceiling");
                ceiling
            }
            _ => amount,
        }
    }

    /// Iterate over categories and their ceilings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ceilings.iter().map(|(name, ceiling)| (name.as_str(), *ceiling))
    }

    pub fn len(&self) -> usize {
        self.ceilings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ceilings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let capper = ThresholdCapper::default();
        assert_eq!(capper.ceiling(FURNITURE_AND_EQUIPMENT), Some(15_000.0));
        assert_eq!(capper.ceiling(COMPUTER_HARDWARE), Some(15_000.0));
        assert_eq!(capper.len(), 2);
    }

    #[test]
    fn test_cap_above_ceiling() {
        let capper = ThresholdCapper::default();
        assert_eq!(capper.cap(FURNITURE_AND_EQUIPMENT, 20_000.0), 15_000.0);
    }

    #[test]
    fn test_cap_below_and_at_ceiling() {
        let capper = ThresholdCapper::default();
        assert_eq!(capper.cap(COMPUTER_HARDWARE, 9_999.99), 9_999.99);
        assert_eq!(capper.cap(COMPUTER_HARDWARE, 15_000.0), 15_000.0);
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let capper = ThresholdCapper::default();
        assert_eq!(capper.cap("Travel", 1_000_000.0), 1_000_000.0);
        assert!(!capper.is_capped("Travel"));
    }

    #[test]
    fn test_injected_ceiling() {
        let capper = ThresholdCapper::default().with_ceiling(COMPUTER_HARDWARE, 13_000.0);
        assert_eq!(capper.cap(COMPUTER_HARDWARE, 14_000.0), 13_000.0);
        assert_eq!(capper.cap(FURNITURE_AND_EQUIPMENT, 14_000.0), 14_000.0);
    }

    #[test]
    fn test_empty_table() {
        let capper = ThresholdCapper::empty();
        assert!(capper.is_empty());
        assert_eq!(capper.cap(FURNITURE_AND_EQUIPMENT, 50_000.0), 50_000.0);
    }

    #[test]
    fn test_serializes_as_map() {
        let capper = ThresholdCapper::empty().with_ceiling("Vehicles", 8_000.0);
        let json = serde_json::to_string(&capper).unwrap();
        assert_eq!(json, r#"{"Vehicles":8000.0}"#);

        let loaded: ThresholdCapper = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, capper);
    }
}
