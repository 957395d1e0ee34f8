use thiserror::Error;

use crate::model::{CourseCode, QuestionId};

/// Topic label shown when a record carries none.
pub const DEFAULT_TOPIC: &str = "General";

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question content as it arrives from storage or seed data.
///
/// `topic` and `course` are optional on the wire; prompt and solution are a
/// required-field contract and are checked by [`QuestionDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub topic: Option<String>,
    pub course: Option<CourseCode>,
    pub prompt: String,
    pub solution: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            topic: None,
            course: None,
            prompt: prompt.into(),
            solution: solution.into(),
        }
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub fn with_course(mut self, course: CourseCode) -> Self {
        self.course = Some(course);
        self
    }

    /// Checks the required-field contract.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or the solution is blank.
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.solution.trim().is_empty() {
            return Err(QuestionError::EmptySolution);
        }

        Ok(ValidatedQuestion {
            topic: self.topic,
            course: self.course,
            prompt: self.prompt,
            solution: self.solution,
        })
    }
}

/// Question content that passed validation but has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    topic: Option<String>,
    course: Option<CourseCode>,
    prompt: String,
    solution: String,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            topic: self.topic,
            course: self.course,
            prompt: self.prompt,
            solution: self.solution,
        }
    }
}

/// One reviewable record: prompt, solution and optional metadata.
///
/// Prompt and solution may contain markup; the core treats them as opaque
/// text and leaves rendering to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    topic: Option<String>,
    course: Option<CourseCode>,
    prompt: String,
    solution: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Topic as stored, if any.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Topic with the missing case resolved to [`DEFAULT_TOPIC`].
    #[must_use]
    pub fn topic_or_default(&self) -> &str {
        self.topic.as_deref().unwrap_or(DEFAULT_TOPIC)
    }

    /// Course this record belongs to, if it names one.
    ///
    /// Records without a course belong to the catalog's default course; that
    /// resolution happens at filter time, not here.
    #[must_use]
    pub fn course(&self) -> Option<&CourseCode> {
        self.course.as_ref()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("solution text cannot be empty")]
    EmptySolution,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_fails_if_prompt_empty() {
        let err = QuestionDraft::new("   ", "x >= 0").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_fails_if_solution_empty() {
        let err = QuestionDraft::new("What is a basic feasible solution?", " ")
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptySolution);
    }

    #[test]
    fn valid_question_validates_and_assigns_id() {
        let course = CourseCode::new("IE553").unwrap();
        let question = QuestionDraft::new("State the weak duality theorem.", "cTx <= bTy")
            .with_topic("Duality")
            .with_course(course.clone())
            .validate()
            .unwrap()
            .assign_id(QuestionId::new(7));

        assert_eq!(question.id(), QuestionId::new(7));
        assert_eq!(question.topic(), Some("Duality"));
        assert_eq!(question.course(), Some(&course));
        assert_eq!(question.prompt(), "State the weak duality theorem.");
    }

    #[test]
    fn missing_topic_resolves_to_general() {
        let question = QuestionDraft::new("Q", "A")
            .validate()
            .unwrap()
            .assign_id(QuestionId::new(1));

        assert_eq!(question.topic(), None);
        assert_eq!(question.topic_or_default(), DEFAULT_TOPIC);
    }
}
