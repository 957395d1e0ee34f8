use async_trait::async_trait;
use prep_core::model::{CourseCode, Question, QuestionDraft, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// No persisted store exists yet. Callers recover by seeding defaults.
    #[error("question store does not exist")]
    Missing,

    /// The store exists but cannot be parsed. Callers must degrade to "no
    /// usable records" and warn, never crash.
    #[error("malformed question store at {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a question, as it appears in the JSON store.
///
/// This mirrors the domain `Question` so adapters can serialize/deserialize
/// without leaking storage concerns into the domain layer. `topic` and
/// `lesson` are optional on disk and omitted when absent; unknown fields in
/// input are ignored so newer writers stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<String>,
    pub question: String,
    pub solution: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            topic: question.topic().map(str::to_owned),
            lesson: question.course().map(|course| course.as_str().to_owned()),
            question: question.prompt().to_owned(),
            solution: question.solution().to_owned(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `prep_core::Error` if the question/solution text fails the
    /// required-field contract or the lesson field is not a usable course
    /// code.
    pub fn into_question(self) -> Result<Question, prep_core::Error> {
        let mut draft = QuestionDraft::new(self.question, self.solution);
        if let Some(topic) = self.topic {
            draft = draft.with_topic(topic);
        }
        if let Some(lesson) = self.lesson {
            draft = draft.with_course(CourseCode::new(lesson)?);
        }
        Ok(draft.validate()?.assign_id(QuestionId::new(self.id)))
    }
}

/// Decode persisted records into domain questions.
///
/// Records that fail validation are dropped with a warning naming their id
/// rather than failing the whole load; a bad record must not take the store
/// down with it. Duplicate ids keep the first occurrence.
#[must_use]
pub fn decode_records(records: Vec<QuestionRecord>) -> Vec<Question> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut questions = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id;
        if !seen.insert(id) {
            tracing::warn!(id, "dropping record with duplicate id");
            continue;
        }
        match record.into_question() {
            Ok(question) => questions.push(question),
            Err(err) => {
                tracing::warn!(id, %err, "dropping invalid record");
            }
        }
    }

    questions
}

/// Repository contract for the question store.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Load every usable record from the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Missing` when no store exists,
    /// `StorageError::Malformed` when it cannot be parsed, or other storage
    /// errors for I/O failures.
    async fn load_all(&self) -> Result<Vec<Question>, StorageError>;

    /// Replace the stored record list with `questions`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be written.
    async fn save_all(&self, questions: &[Question]) -> Result<(), StorageError>;
}

/// Simple in-memory store implementation for testing and prototyping.
///
/// A fresh store behaves like an absent file (`load_all` returns `Missing`)
/// until the first `save_all`. `save_count` exposes how often the store was
/// written, which the seeding and merge rules care about.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    questions: Arc<Mutex<Option<Vec<Question>>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(Mutex::new(Some(questions))),
            saves: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of `save_all` calls so far.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock().expect("save counter lock poisoned")
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn load_all(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard.clone().ok_or(StorageError::Missing)
    }

    async fn save_all(&self, questions: &[Question]) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = Some(questions.to_vec());
        drop(guard);

        let mut saves = self
            .saves
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *saves += 1;
        Ok(())
    }
}

/// Aggregates the question store behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            questions: Arc::new(InMemoryStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question(id: u64) -> Question {
        QuestionDraft::new(format!("Q{id}"), format!("A{id}"))
            .validate()
            .unwrap()
            .assign_id(QuestionId::new(id))
    }

    #[tokio::test]
    async fn fresh_store_reports_missing() {
        let store = InMemoryStore::new();
        assert!(matches!(store.load_all().await, Err(StorageError::Missing)));
    }

    #[tokio::test]
    async fn round_trips_saved_questions() {
        let store = InMemoryStore::new();
        let questions = vec![build_question(1), build_question(2)];

        store.save_all(&questions).await.unwrap();
        let loaded = store.load_all().await.unwrap();

        assert_eq!(loaded, questions);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn record_round_trips_optional_fields() {
        let question = QuestionDraft::new("What is the dual of a maximization LP?", "A minimization LP.")
            .with_topic("Duality")
            .with_course(CourseCode::new("IE553").unwrap())
            .validate()
            .unwrap()
            .assign_id(QuestionId::new(3));

        let record = QuestionRecord::from_question(&question);
        assert_eq!(record.lesson.as_deref(), Some("IE553"));

        let back = record.into_question().unwrap();
        assert_eq!(back, question);
    }

    #[test]
    fn decode_drops_invalid_and_duplicate_records() {
        let records = vec![
            QuestionRecord {
                id: 1,
                topic: None,
                lesson: None,
                question: "Q1".into(),
                solution: "A1".into(),
            },
            QuestionRecord {
                id: 2,
                topic: None,
                lesson: None,
                question: "Q2".into(),
                solution: "   ".into(),
            },
            QuestionRecord {
                id: 1,
                topic: None,
                lesson: None,
                question: "Q1 again".into(),
                solution: "A1 again".into(),
            },
        ];

        let questions = decode_records(records);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id(), QuestionId::new(1));
        assert_eq!(questions[0].prompt(), "Q1");
    }
}
