use wordhoard_types::{MediaKind, VocabularyRecord, WordSummary};

use crate::error::StoreError;

/// Persistent vocabulary keyed by base form.
///
/// `insert` must enforce key uniqueness and report a clash as
/// [`StoreError::Duplicate`].
#[async_trait::async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Fetch a record by its word key
    async fn get(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError>;

    /// Insert a new record
    async fn insert(&self, record: VocabularyRecord) -> Result<(), StoreError>;

    /// Summaries of every record, sorted by word
    async fn list(&self) -> Result<Vec<WordSummary>, StoreError>;

    /// Full records, sorted by word
    async fn all(&self) -> Result<Vec<VocabularyRecord>, StoreError>;

    /// Set the user image or audio URL of an existing record
    async fn attach_media(&self, word: &str, kind: MediaKind, url: &str)
    -> Result<(), StoreError>;

    /// Remove a record, returning it so attached media can be released
    async fn delete(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError>;
}
