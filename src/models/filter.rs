//! Structured equality filter handed to the storage query layer
//!
//! Serializes as `{"<field>": {"$in": [...]}, ...}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multi-value equality clause for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InClause {
    #[serde(rename = "$in")]
    pub values: Vec<String>,
}

/// A filter query keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterQuery(BTreeMap<String, InClause>);

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values for a field, replacing any earlier clause for it
    pub fn set(&mut self, field: impl Into<String>, values: Vec<String>) {
        self.0.insert(field.into(), InClause { values });
    }

    /// Values accepted for a field
    pub fn values(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|clause| clause.values.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over fields and their accepted values in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, clause)| (field.as_str(), clause.values.as_slice()))
    }
}
