//! Accordion section descriptor supplied by UI configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SectionId;

/// A display section that questionnaire answers are mapped onto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccordionSection {
    pub id: SectionId,

    pub title: String,

    /// Section body; opaque to the engine
    #[serde(default)]
    pub content: serde_json::Value,
}

impl AccordionSection {
    pub fn new(
        id: impl Into<SectionId>,
        title: impl Into<String>,
        content: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for AccordionSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
