//! Input and output files for the command-line shell
//!
//! The engine never touches the filesystem; this layer loads the documents
//! it is given and writes results back out.

pub mod analytics;
pub mod file_io;

pub use analytics::{load_analytics, parse_analytics_csv};
pub use file_io::{read_input, read_input_or_default, replace_json};
