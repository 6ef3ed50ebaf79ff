//! Questionnaire reconciliation
//!
//! Merges a newly submitted set of questionnaire answers into the set stored
//! for a user. Answers are merged per question: stored answers the user
//! re-submitted are dropped in favour of the submitted ones, stored answers
//! that were not re-submitted are kept.
//!
//! Deduplication only ever filters the stored side, and only for answers
//! that have an identity. Duplicates inside one submission are kept, and
//! answers without an identity (maps with several keys, other shapes) are
//! appended again on every re-submission.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{Answer, Questionnaire};

/// Merge `incoming` into `existing`
///
/// Output holds every incoming entry (merged when the question was already
/// stored) in incoming order, followed by stored entries for questions that
/// were not submitted, in stored order.
pub fn merge(existing: &[Questionnaire], incoming: &[Questionnaire]) -> Vec<Questionnaire> {
    let mut stored: HashMap<&str, &Questionnaire> = HashMap::with_capacity(existing.len());
    for entry in existing {
        stored.entry(entry.question.as_str()).or_insert(entry);
    }

    let submitted: HashSet<&str> = incoming.iter().map(|q| q.question.as_str()).collect();

    let mut merged: Vec<Questionnaire> = incoming
        .iter()
        .map(|entry| match stored.get(entry.question.as_str()) {
            Some(previous) => merge_answers(previous, entry),
            None => entry.clone(),
        })
        .collect();

    merged.extend(
        existing
            .iter()
            .filter(|entry| !submitted.contains(entry.question.as_str()))
            .cloned(),
    );

    merged
}

/// Stale stored answers followed by every submitted answer
fn merge_answers(previous: &Questionnaire, submitted: &Questionnaire) -> Questionnaire {
    let resubmitted: HashSet<&str> = submitted.identities().collect();

    let kept: Vec<Answer> = previous
        .answers
        .iter()
        .filter(|answer| match answer.identity() {
            Some(identity) => !resubmitted.contains(identity),
            None => true,
        })
        .cloned()
        .collect();

    debug!(
        question = %submitted.question,
        kept = kept.len(),
        dropped = previous.answers.len() - kept.len(),
        submitted = submitted.answers.len(),
        "merged questionnaire answers"
    );

    let mut answers = kept;
    answers.extend(submitted.answers.iter().cloned());

    Questionnaire {
        question: submitted.question.clone(),
        answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(question: &str, answers: &[&str]) -> Questionnaire {
        Questionnaire::new(question, answers.to_vec())
    }

    #[test]
    fn test_merge_same_question() {
        let merged = merge(&[q("Q1", &["a", "b"])], &[q("Q1", &["b", "c"])]);
        assert_eq!(merged, vec![q("Q1", &["a", "b", "c"])]);
    }

    #[test]
    fn test_new_question_passes_through() {
        let merged = merge(&[q("Q1", &["a"])], &[q("Q2", &["x"])]);
        assert_eq!(merged, vec![q("Q2", &["x"]), q("Q1", &["a"])]);
    }

    #[test]
    fn test_output_order() {
        let existing = vec![q("Q1", &["a"]), q("Q2", &["b"]), q("Q3", &["c"])];
        let incoming = vec![q("Q4", &["d"]), q("Q2", &["e"])];

        let merged = merge(&existing, &incoming);
        let order: Vec<&str> = merged.iter().map(|m| m.question.as_str()).collect();
        assert_eq!(order, vec!["Q4", "Q2", "Q1", "Q3"]);
        assert_eq!(merged[1], q("Q2", &["b", "e"]));
    }

    #[test]
    fn test_empty_sides() {
        assert!(merge(&[], &[]).is_empty());
        assert_eq!(merge(&[q("Q1", &["a"])], &[]), vec![q("Q1", &["a"])]);
        assert_eq!(merge(&[], &[q("Q1", &["a"])]), vec![q("Q1", &["a"])]);
    }

    #[test]
    fn test_keyed_identity_replaces_stored_sub_answer() {
        let existing = vec![Questionnaire {
            question: "Loans".into(),
            answers: vec![Answer::keyed("Have a loan", "Car"), Answer::from("Student")],
        }];
        let incoming = vec![Questionnaire {
            question: "Loans".into(),
            answers: vec![Answer::keyed("Have a loan", "Mortgage")],
        }];

        let merged = merge(&existing, &incoming);
        assert_eq!(
            merged[0].answers,
            vec![Answer::from("Student"), Answer::keyed("Have a loan", "Mortgage")]
        );
    }

    #[test]
    fn test_string_and_key_share_identity() {
        let existing = vec![Questionnaire {
            question: "Loans".into(),
            answers: vec![Answer::keyed("Have a loan", "Car")],
        }];
        let incoming = vec![q("Loans", &["Have a loan"])];

        let merged = merge(&existing, &incoming);
        assert_eq!(merged[0].answers, vec![Answer::from("Have a loan")]);
    }

    #[test]
    fn test_incoming_duplicates_not_collapsed() {
        let merged = merge(&[q("Q1", &["a"])], &[q("Q1", &["b", "b"])]);
        assert_eq!(merged, vec![q("Q1", &["a", "b", "b"])]);
    }

    #[test]
    fn test_repeated_submission_of_identified_answers() {
        let existing = vec![q("Q1", &["a", "b"])];
        let incoming = vec![q("Q1", &["b", "c"])];

        let first = merge(&existing, &incoming);
        assert_eq!(first, vec![q("Q1", &["a", "b", "c"])]);

        // merge is not idempotent in general, but identified answers are:
        // stored "b" and "c" are stale against the same submission and get
        // replaced rather than duplicated
        let second = merge(&first, &incoming);
        assert_eq!(second, first);
    }

    #[test]
    fn test_repeated_submission_duplicates_unidentified_answers() {
        let multi: Answer = serde_json::from_value(serde_json::json!({
            "Have a loan": "Car",
            "Have a mortgage": "Yes"
        }))
        .unwrap();
        let incoming = vec![Questionnaire {
            question: "Loans".into(),
            answers: vec![Answer::from("Student"), multi.clone()],
        }];

        let first = merge(&[], &incoming);
        assert_eq!(first[0].answers.len(), 2);

        let second = merge(&first, &incoming);
        assert_eq!(
            second[0].answers,
            vec![multi.clone(), Answer::from("Student"), multi.clone()]
        );

        let third = merge(&second, &incoming);
        assert_eq!(third[0].answers.len(), 4);
    }

    #[test]
    fn test_no_duplicate_questions_for_unique_inputs() {
        let existing = vec![q("Q1", &["a"]), q("Q2", &["b"])];
        let incoming = vec![q("Q2", &["c"]), q("Q3", &["d"])];

        let merged = merge(&existing, &incoming);
        let questions: HashSet<&str> = merged.iter().map(|m| m.question.as_str()).collect();
        assert_eq!(questions.len(), merged.len());
    }
}
