//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `LibraryService`.
///
/// Only unrecoverable storage failures surface here; an absent store is
/// seeded and a malformed one degrades to the built-in set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibraryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
