use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use prep_core::model::Question;

use crate::repository::{QuestionRecord, QuestionStore, Storage, StorageError, decode_records};

/// Flat-file store: a UTF-8 file holding one JSON array of records.
///
/// Reads are tolerant per record (a record that fails to decode is skipped
/// with a warning); only a file that is not a JSON array at all counts as
/// malformed. Writes replace the whole file with a pretty-printed array so
/// diffs stay stable across merges.
#[derive(Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionStore for JsonStore {
    async fn load_all(&self) -> Result<Vec<Question>, StorageError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::Missing);
            }
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        let values: Vec<serde_json::Value> =
            serde_json::from_str(&text).map_err(|err| StorageError::Malformed {
                path: self.path.display().to_string(),
                message: err.to_string(),
            })?;

        let mut records = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<QuestionRecord>(value) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping undecodable record");
                }
            }
        }

        Ok(decode_records(records))
    }

    async fn save_all(&self, questions: &[Question]) -> Result<(), StorageError> {
        let records: Vec<QuestionRecord> =
            questions.iter().map(QuestionRecord::from_question).collect();
        let text = serde_json::to_string_pretty(&records)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        tokio::fs::write(&self.path, text)
            .await
            .map_err(|err| StorageError::Io(err.to_string()))
    }
}

impl Storage {
    /// Build a `Storage` backed by a JSON flat file at `path`.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            questions: Arc::new(JsonStore::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonStore>();
    }
}
