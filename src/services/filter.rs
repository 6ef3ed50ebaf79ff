//! Filter expression parsing
//!
//! Turns the compact filter string used in UI query parameters, e.g.
//! `category=office supplies,travel&status=open`, into a `FilterQuery`.

use tracing::trace;

use crate::models::FilterQuery;

/// Field whose values are title-cased to match stored category names
pub const CATEGORY_FIELD: &str = "category";

/// Parse a filter expression
///
/// Clauses are separated by `&`, each is `field=value[,value...]`, split on
/// the first `=`. Clauses with an empty field or value are skipped. Values
/// are trimmed; `category` values are title-cased word by word. When a field
/// repeats, the last clause wins.
pub fn parse(input: Option<&str>) -> FilterQuery {
    let mut query = FilterQuery::new();

    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return query;
    };

    for clause in input.split('&') {
        let Some((field, value)) = clause.split_once('=') else {
            trace!(clause, "skipping filter clause without '='");
            continue;
        };
        if field.is_empty() || value.is_empty() {
            trace!(clause, "skipping incomplete filter clause");
            continue;
        }

        let values = value
            .split(',')
            .map(str::trim)
            .map(|token| {
                if field == CATEGORY_FIELD {
                    title_case(token)
                } else {
                    token.to_string()
                }
            })
            .collect();

        query.set(field, values);
    }

    query
}

/// Capitalize the first letter of each space-separated word and lower-case
/// the rest
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let rest = chars.as_str().to_lowercase();
                    first.to_uppercase().chain(rest.chars()).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
