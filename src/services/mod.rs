//! Service layer for the deduction engine
//!
//! Every service here is a pure function of its inputs: no I/O, no shared
//! state. The CLI and any other caller load inputs, call a service, and
//! render or persist the result themselves.

pub mod category;
pub mod deductible;
pub mod filter;
pub mod questionnaire;
pub mod section;
pub mod threshold;

pub use category::{AggregationMode, CategoryAggregator, DEFAULT_CUSTOM_GROUP_NAME};
pub use deductible::{DeductibleSummary, TopCategory, UtilitiesShare};
pub use section::{SectionMatcher, TieBreak};
pub use threshold::ThresholdCapper;
