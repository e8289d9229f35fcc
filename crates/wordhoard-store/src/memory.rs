use std::collections::BTreeMap;

use tokio::sync::RwLock;
use wordhoard_core::{StoreError, VocabularyStore};
use wordhoard_types::{MediaKind, VocabularyRecord, WordSummary};

/// Process-local store, ordered by word
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, VocabularyRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl VocabularyStore for MemoryStore {
    async fn get(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        Ok(self.records.read().await.get(word).cloned())
    }

    async fn insert(&self, record: VocabularyRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.word) {
            return Err(StoreError::Duplicate(record.word));
        }
        records.insert(record.word.clone(), record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<WordSummary>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .map(WordSummary::from)
            .collect())
    }

    async fn all(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn attach_media(
        &self,
        word: &str,
        kind: MediaKind,
        url: &str,
    ) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(word)
            .ok_or_else(|| StoreError::NotFound(word.to_string()))?;

        match kind {
            MediaKind::Image => record.user_image_url = Some(url.to_string()),
            MediaKind::Audio => record.user_audio_url = Some(url.to_string()),
        }
        Ok(())
    }

    async fn delete(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        Ok(self.records.write().await.remove(word))
    }
}
