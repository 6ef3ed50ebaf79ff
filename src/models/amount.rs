//! Amount handling for analytics rows
//!
//! Analytics queries hand over amounts either as JSON numbers or as decimal
//! strings. `RawAmount` keeps whatever arrived and coerces on demand, so a
//! malformed value never aborts a computation; callers decide what to do
//! with a value that does not coerce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount as supplied by an analytics query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number
    Number(f64),
    /// A decimal string such as `"1250.40"`
    Text(String),
}

impl RawAmount {
    /// Coerce to a finite number
    ///
    /// Strings are trimmed and parsed as decimals. Returns `None` for
    /// unparseable text and for non-finite values.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(n) => write!(f, "{}", n),
            RawAmount::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
