//! Questionnaire display formatting
//!
//! Formats questionnaire sets as a tree and matched sections as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AccordionSection, Questionnaire};

#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Content")]
    content: String,
}

/// Format a questionnaire set as a tree of questions and answers
pub fn format_questionnaire_tree(entries: &[Questionnaire]) -> String {
    if entries.is_empty() {
        return "No questionnaire answers.\n".to_string();
    }

    let mut output = String::new();

    for entry in entries {
        output.push_str(&format!("{}\n", entry.question));

        if entry.answers.is_empty() {
            output.push_str("  (no answers)\n");
            continue;
        }

        for (i, answer) in entry.answers.iter().enumerate() {
            let prefix = if i == entry.answers.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(&format!("  {}{}\n", prefix, answer));
        }
    }

    output
}

/// Format matched sections as a table, content shortened to one line
pub fn format_section_list(sections: &[AccordionSection]) -> String {
    if sections.is_empty() {
        return "No matching sections.".to_string();
    }

    let rows = sections.iter().map(|section| SectionRow {
        id: section.id.to_string(),
        title: section.title.clone(),
        content: truncate(&content_text(&section.content), 40),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn content_text(content: &serde_json::Value) -> String {
    match content {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Truncate to `max_chars` characters with an ellipsis
fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= max_chars {
        return text;
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    #[test]
    fn test_questionnaire_tree() {
        let entries = vec![
            Questionnaire {
                question: "Loans".into(),
                answers: vec![Answer::from("Student"), Answer::keyed("Have a loan", "Car")],
            },
            Questionnaire { question: "Children".into(), answers: vec![] },
        ];

        let output = format_questionnaire_tree(&entries);
        assert!(output.contains("Loans\n  ├── Student\n  └── Have a loan: Car\n"));
        assert!(output.contains("Children\n  (no answers)\n"));
    }

    #[test]
    fn test_section_list() {
        let sections = vec![AccordionSection::new(
            "2",
            "Do you have a loan?",
            "Interest on student loans and mortgages may be deductible in some cases",
        )];

        let output = format_section_list(&sections);
        assert!(output.contains("Do you have a loan?"));
        assert!(output.contains("..."));
        assert_eq!(format_section_list(&[]), "No matching sections.");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("crèche fees apply", 9), "crèche...");
    }
}
