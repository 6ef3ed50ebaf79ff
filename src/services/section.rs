//! Questionnaire section matching
//!
//! Maps questionnaire answers onto the accordion sections that explain them.
//! An answer belongs to a section when the section title, normalized,
//! contains the answer text, normalized the same way.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::models::{AccordionSection, Answer};

/// Which section wins when several titles contain the same answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The first containing section in configuration order
    #[default]
    #[value(alias = "first")]
    FirstInOrder,
    /// A title equal to the answer wins; otherwise the first containing section
    #[value(alias = "exact")]
    PreferExact,
}

/// Lower-case, decompose, and keep only ASCII word characters and whitespace
///
/// Decomposition splits accented letters into base letter plus combining
/// mark; the mark is then stripped, so "Crèche" normalizes to "creche".
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Matches answers to accordion sections
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionMatcher {
    tie_break: TieBreak,
}

impl SectionMatcher {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Match an answer set given as raw JSON
    ///
    /// Anything other than an array returns `sections` unchanged. Array
    /// elements are read as answers; shapes without display text are skipped.
    pub fn match_value(
        &self,
        answer_set: &serde_json::Value,
        sections: &[AccordionSection],
    ) -> Vec<AccordionSection> {
        let Some(elements) = answer_set.as_array() else {
            debug!("answer set is not a sequence; returning sections unchanged");
            return sections.to_vec();
        };

        let answers: Vec<Answer> = elements
            .iter()
            .map(|element| {
                serde_json::from_value(element.clone())
                    .unwrap_or_else(|_| Answer::Other(element.clone()))
            })
            .collect();

        self.match_sections(&answers, sections)
    }

    /// The section for each answer that has one, in answer order
    ///
    /// Answers without display text, or that match no title, are left out.
    /// Text that normalizes to nothing is contained in every title, so it
    /// takes the first section.
    pub fn match_sections(
        &self,
        answers: &[Answer],
        sections: &[AccordionSection],
    ) -> Vec<AccordionSection> {
        let titles: Vec<String> = sections.iter().map(|s| normalize(&s.title)).collect();

        answers
            .iter()
            .filter_map(|answer| {
                let text = answer.identity()?;
                let needle = normalize(text);

                let index = self.find_title(&titles, &needle);
                if index.is_none() {
                    trace!(answer = text, "no section matches answer");
                }
                index.map(|i| sections[i].clone())
            })
            .collect()
    }

    fn find_title(&self, titles: &[String], needle: &str) -> Option<usize> {
        if self.tie_break == TieBreak::PreferExact {
            if let Some(exact) = titles.iter().position(|title| title == needle) {
                return Some(exact);
            }
        }

        titles.iter().position(|title| title.contains(needle))
    }
}

/// Match answers to sections using the first-in-order tie-break
pub fn match_sections(answers: &[Answer], sections: &[AccordionSection]) -> Vec<AccordionSection> {
    SectionMatcher::default().match_sections(answers, sections)
}
