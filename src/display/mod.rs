//! Display formatting for terminal output
//!
//! Renders engine results as tables and trees for the `table` output format.

pub mod category;
pub mod query;
pub mod questionnaire;

pub use category::{format_group_table, format_threshold_table};
pub use query::format_filter_query;
pub use questionnaire::{format_questionnaire_tree, format_section_list};
