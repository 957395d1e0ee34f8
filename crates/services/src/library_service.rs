use std::sync::Arc;

use prep_core::merge::{MergeOutcome, merge_defaults};
use prep_core::model::Question;
use storage::repository::{QuestionStore, StorageError};

use crate::error::LibraryError;
use crate::seed::default_question_set;

/// Orchestrates store loading, default seeding and the append-only merge.
///
/// The store is read once at startup and written back only when the merge
/// appended something or an absent store was initialized. Write failures on
/// those paths are logged and non-fatal; the in-memory set is still served.
#[derive(Clone)]
pub struct LibraryService {
    store: Arc<dyn QuestionStore>,
    defaults: Vec<Question>,
}

impl LibraryService {
    #[must_use]
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self::with_defaults(store, default_question_set())
    }

    /// Build a service seeding a custom default set instead of the built-in
    /// one.
    #[must_use]
    pub fn with_defaults(store: Arc<dyn QuestionStore>, defaults: Vec<Question>) -> Self {
        Self { store, defaults }
    }

    /// Load the library, recovering from an absent or malformed store.
    ///
    /// - Absent store: initialized with the default set, which is returned.
    /// - Malformed store: the default set is served from memory and the file
    ///   is left untouched for the user to repair.
    /// - Readable store: the default set is merged in append-only by id, and
    ///   the merged list is persisted back only when something was appended.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Storage` for I/O failures other than "absent"
    /// or "unparseable" (e.g. permissions); there is no degraded mode for
    /// those.
    pub async fn load_or_seed(&self) -> Result<Vec<Question>, LibraryError> {
        let existing = match self.store.load_all().await {
            Ok(questions) => questions,
            Err(StorageError::Missing) => {
                tracing::info!("no question store found, initializing it with the built-in set");
                self.persist_best_effort(&self.defaults).await;
                return Ok(self.defaults.clone());
            }
            Err(err @ StorageError::Malformed { .. }) => {
                tracing::warn!(%err, "serving the built-in set instead; the file was left untouched");
                return Ok(self.defaults.clone());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(self.merge_and_persist(existing).await)
    }

    /// Merge the default set into `existing` and persist if anything was
    /// appended.
    ///
    /// Merging twice with the same inputs returns the same sequence and
    /// triggers no second write.
    pub async fn merge_and_persist(&self, existing: Vec<Question>) -> Vec<Question> {
        let MergeOutcome {
            questions,
            appended,
        } = merge_defaults(existing, &self.defaults);

        if appended > 0 {
            tracing::info!(appended, "appended missing default questions");
            self.persist_best_effort(&questions).await;
        }

        questions
    }

    // Fire-and-forget write: the caller keeps the in-memory result either way.
    async fn persist_best_effort(&self, questions: &[Question]) {
        if let Err(err) = self.store.save_all(questions).await {
            tracing::warn!(%err, "failed to persist the question store");
        }
    }
}
