//! Core data models for the deduction engine
//!
//! These are the boundary types exchanged with the surrounding application:
//! analytics rows, category groups, questionnaires, display sections and
//! filter queries. All of them serialize to the JSON shapes the web layer
//! already uses.

pub mod amount;
pub mod category;
pub mod filter;
pub mod ids;
pub mod questionnaire;
pub mod section;

pub use amount::{round2, RawAmount};
pub use category::{CategoryGroup, CategoryItem, CategoryRecord, CustomCategory};
pub use filter::{FilterQuery, InClause};
pub use ids::{GroupId, SectionId};
pub use questionnaire::{Answer, Questionnaire};
pub use section::AccordionSection;
