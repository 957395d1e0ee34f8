//! Append-only merge of the built-in default set into a loaded library.

use std::collections::HashSet;

use crate::model::{Question, QuestionId};

/// Result of merging defaults into an existing library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub questions: Vec<Question>,
    /// How many default records were appended. Zero means the store already
    /// contained every default id and no write-back is needed.
    pub appended: usize,
}

/// Appends every default whose id is not already present.
///
/// Existing records keep their relative order and are never edited or
/// removed; new defaults are appended at the end in their own fixed order.
/// Merging the same inputs twice yields the same sequence with
/// `appended == 0` the second time.
#[must_use]
pub fn merge_defaults(existing: Vec<Question>, defaults: &[Question]) -> MergeOutcome {
    let known: HashSet<QuestionId> = existing.iter().map(Question::id).collect();

    let mut questions = existing;
    let mut appended = 0;
    for default in defaults {
        if !known.contains(&default.id()) {
            questions.push(default.clone());
            appended += 1;
        }
    }

    MergeOutcome {
        questions,
        appended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn question(id: u64, prompt: &str) -> Question {
        QuestionDraft::new(prompt, "answer")
            .validate()
            .unwrap()
            .assign_id(QuestionId::new(id))
    }

    #[test]
    fn merge_appends_only_missing_ids() {
        let existing = vec![question(1, "old one"), question(3, "old three")];
        let defaults = vec![
            question(1, "default one"),
            question(2, "default two"),
            question(4, "default four"),
        ];

        let outcome = merge_defaults(existing, &defaults);

        assert_eq!(outcome.appended, 2);
        let ids: Vec<u64> = outcome.questions.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
        // The existing record wins over the default with the same id.
        assert_eq!(outcome.questions[0].prompt(), "old one");
    }

    #[test]
    fn merge_preserves_existing_order() {
        let existing = vec![question(5, "five"), question(2, "two"), question(9, "nine")];
        let outcome = merge_defaults(existing.clone(), &[]);
        assert_eq!(outcome.questions, existing);
        assert_eq!(outcome.appended, 0);
    }

    #[test]
    fn merge_is_idempotent() {
        let defaults = vec![question(1, "a"), question(2, "b")];

        let first = merge_defaults(Vec::new(), &defaults);
        assert_eq!(first.appended, 2);

        let second = merge_defaults(first.questions.clone(), &defaults);
        assert_eq!(second.appended, 0);
        assert_eq!(second.questions, first.questions);
    }
}
