//! Onboarding questionnaire models
//!
//! A questionnaire entry pairs a question with the answers a user picked.
//! Answers are plain strings or single-key maps (a sub-answer, e.g.
//! `{"Have a loan": "Mortgage"}`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One selected answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// A plain answer
    Text(String),
    /// A sub-answer map, normally holding exactly one key
    Keyed(BTreeMap<String, String>),
    /// Any other JSON shape; carried through but never matched
    Other(serde_json::Value),
}

impl Answer {
    /// Create a sub-answer
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key.into(), value.into());
        Answer::Keyed(map)
    }

    /// The identity of the answer: its text, or the sole key of a map
    ///
    /// Maps with zero or several keys and other shapes have no identity.
    /// The identity doubles as the answer's display text.
    pub fn identity(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            Answer::Keyed(map) if map.len() == 1 => map.keys().next().map(String::as_str),
            _ => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{}", text),
            Answer::Keyed(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{}", parts.join(", "))
            }
            Answer::Other(value) => write!(f, "{}", value),
        }
    }
}

/// A question with its selected answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// The question text; unique within a questionnaire set
    pub question: String,

    /// Selected answers in submission order
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Questionnaire {
    /// Create a questionnaire entry
    pub fn new<A: Into<Answer>>(question: impl Into<String>, answers: Vec<A>) -> Self {
        Self {
            question: question.into(),
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Find an entry by question in a questionnaire set
    pub fn find<'a>(set: &'a [Questionnaire], question: &str) -> Option<&'a Questionnaire> {
        set.iter().find(|q| q.question == question)
    }

    /// Identities of all answers that have one
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().filter_map(Answer::identity)
    }
}
