//! Strongly-typed ID wrappers for externally supplied entities
//!
//! Group and section identifiers come from product configuration, where they
//! may be written either as strings or as plain numbers. Both forms are
//! accepted and normalized to their string representation.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Any JSON scalar accepted as an identifier
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Integer(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from any string-like value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

define_id!(GroupId);
define_id!(SectionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = GroupId::new("business-expenses");
        assert_eq!(format!("{}", id), "business-expenses");
        assert_eq!(id.as_str(), "business-expenses");
    }

    #[test]
    fn test_numeric_id_accepted() {
        let id: SectionId = serde_json::from_str("7").unwrap();
        assert_eq!(id, SectionId::from("7"));

        let id: GroupId = serde_json::from_str("\"grp-1\"").unwrap();
        assert_eq!(id, GroupId::from("grp-1"));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id: SectionId = serde_json::from_str("12").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
    }

    #[test]
    fn test_non_scalar_rejected() {
        assert!(serde_json::from_str::<GroupId>("[1]").is_err());
    }
}
