use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wordhoard_config::Config;
use wordhoard_core::{DefinitionSource, Pipeline, StoreError, VocabularyStore};
use wordhoard_lang_english::EnglishProcessor;
use wordhoard_store::MemoryStore;
use wordhoard_types::{
    Definition, DefinitionResult, MediaKind, VocabularyRecord, WordSummary,
};

use crate::state::AppState;

/// Defines every word except the listed ones
#[derive(Default)]
pub struct StubDictionary {
    missing: HashSet<String>,
    calls: AtomicUsize,
}

impl StubDictionary {
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
impl DefinitionSource for StubDictionary {
    async fn define(&self, word: &str) -> Definition {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.missing.contains(word) {
            return Definition::NotFound;
        }
        Definition::Found(DefinitionResult {
            definition: format!("definition of {word}"),
            pronunciation: format!("ˈ{word}"),
            audio_url: Some(format!("https://cdn.test/{word}.mp3")),
        })
    }
}

/// Memory store that counts every call
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl VocabularyStore for CountingStore {
    async fn get(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        self.touch();
        self.inner.get(word).await
    }

    async fn insert(&self, record: VocabularyRecord) -> Result<(), StoreError> {
        self.touch();
        self.inner.insert(record).await
    }

    async fn list(&self) -> Result<Vec<WordSummary>, StoreError> {
        self.touch();
        self.inner.list().await
    }

    async fn all(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        self.touch();
        self.inner.all().await
    }

    async fn attach_media(
        &self,
        word: &str,
        kind: MediaKind,
        url: &str,
    ) -> Result<(), StoreError> {
        self.touch();
        self.inner.attach_media(word, kind, url).await
    }

    async fn delete(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        self.touch();
        self.inner.delete(word).await
    }
}

pub fn english_pipeline(store: Arc<CountingStore>, dictionary: Arc<StubDictionary>) -> Pipeline {
    Pipeline::new(Arc::new(EnglishProcessor::new()), store, dictionary)
}

pub fn app_state(store: Arc<CountingStore>, dictionary: Arc<StubDictionary>) -> AppState {
    AppState::from_parts(
        Config::default(),
        Arc::new(EnglishProcessor::new()),
        store,
        dictionary,
    )
}
