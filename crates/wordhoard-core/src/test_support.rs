use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;
use wordhoard_types::{
    Definition, DefinitionResult, MediaKind, VocabularyRecord, WordSummary,
};

use crate::dictionary::DefinitionSource;
use crate::error::StoreError;
use crate::language::{LanguageProcessor, Token};
use crate::store::VocabularyStore;

/// Splits on '.', tokenizes on whitespace, keeps words longer than 3 and
/// strips a trailing 's'.
pub struct StubProcessor;

impl LanguageProcessor for StubProcessor {
    fn language_code(&self) -> &str {
        "xx"
    }

    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_inclusive('.').collect()
    }

    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        sentence
            .to_lowercase()
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .map(|w| Token {
                text: w.to_string(),
                position: 0,
            })
            .collect()
    }

    fn is_candidate(&self, token: &str) -> bool {
        token.len() > 3
    }

    fn lemmatize(&self, token: &str) -> String {
        token.strip_suffix('s').unwrap_or(token).to_string()
    }
}

#[derive(Default)]
pub struct FakeSource {
    pub missing: HashSet<String>,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn missing(words: &[&str]) -> Self {
        Self {
            missing: words.iter().map(|w| w.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DefinitionSource for FakeSource {
    async fn define(&self, word: &str) -> Definition {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.missing.contains(word) {
            return Definition::NotFound;
        }
        Definition::Found(DefinitionResult {
            definition: format!("meaning of {word}"),
            pronunciation: word.to_string(),
            audio_url: None,
        })
    }
}

/// In-test store with injectable failures
#[derive(Default)]
pub struct FakeStore {
    pub records: Mutex<HashMap<String, VocabularyRecord>>,
    /// `get` fails for these words
    pub broken: HashSet<String>,
    /// `insert` reports a concurrent duplicate for these words
    pub racing: HashSet<String>,
    pub gets: AtomicUsize,
}

impl FakeStore {
    pub async fn seed(&self, word: &str) {
        let record = VocabularyRecord::new(
            word.to_string(),
            "seeded.".to_string(),
            DefinitionResult {
                definition: "seeded".to_string(),
                pronunciation: String::new(),
                audio_url: None,
            },
        );
        self.records.lock().await.insert(word.to_string(), record);
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl VocabularyStore for FakeStore {
    async fn get(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.broken.contains(word) {
            return Err(StoreError::Backend("connection reset".to_string()));
        }
        Ok(self.records.lock().await.get(word).cloned())
    }

    async fn insert(&self, record: VocabularyRecord) -> Result<(), StoreError> {
        if self.racing.contains(&record.word) {
            return Err(StoreError::Duplicate(record.word));
        }
        let mut records = self.records.lock().await;
        if records.contains_key(&record.word) {
            return Err(StoreError::Duplicate(record.word));
        }
        records.insert(record.word.clone(), record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<WordSummary>, StoreError> {
        let records = self.records.lock().await;
        let mut summaries: Vec<WordSummary> = records.values().map(WordSummary::from).collect();
        summaries.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(summaries)
    }

    async fn all(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        let records = self.records.lock().await;
        let mut all: Vec<VocabularyRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(all)
    }

    async fn attach_media(
        &self,
        word: &str,
        kind: MediaKind,
        url: &str,
    ) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
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
        Ok(self.records.lock().await.remove(word))
    }
}
