//! Filter query display formatting

use crate::models::FilterQuery;

/// Format a filter query as `field in [a, b]` lines
pub fn format_filter_query(query: &FilterQuery) -> String {
    if query.is_empty() {
        return "No filter clauses.".to_string();
    }

    let mut output = String::new();
    for (field, values) in query.iter() {
        output.push_str(&format!("{} in [{}]\n", field, values.join(", ")));
    }
    output
}
