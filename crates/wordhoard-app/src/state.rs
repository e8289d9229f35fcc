use std::sync::Arc;

use wordhoard_config::Config;
use wordhoard_config::store::StoreConfig;
use wordhoard_core::{DefinitionSource, LanguageProcessor, Pipeline, VocabularyStore};
use wordhoard_dictionary::EnrichmentGateway;
use wordhoard_lang_english::{EnglishProcessor, MerriamWebster};
use wordhoard_store::{MemoryStore, SqliteStore};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn VocabularyStore>,
    pub source: Arc<dyn DefinitionSource>,
    pub pipeline: Pipeline,
}

impl AppState {
    /// Wire the English processor, configured store and Merriam-Webster
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = open_store(&config.store).await?;

        if config.dictionary.api_key.is_empty() {
            tracing::warn!("MW_DICTIONARY_KEY is not set, every lookup will miss");
        }
        let source: Arc<dyn DefinitionSource> = Arc::new(EnrichmentGateway::new(
            MerriamWebster::new(&config.dictionary)?,
        ));

        Ok(Self::from_parts(
            config,
            Arc::new(EnglishProcessor::new()),
            store,
            source,
        ))
    }

    pub fn from_parts(
        config: Config,
        processor: Arc<dyn LanguageProcessor>,
        store: Arc<dyn VocabularyStore>,
        source: Arc<dyn DefinitionSource>,
    ) -> Self {
        let pipeline = Pipeline::new(processor, store.clone(), source.clone());

        Self {
            config,
            store,
            source,
            pipeline,
        }
    }
}

async fn open_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn VocabularyStore>> {
    if config.is_memory() {
        tracing::warn!("Using in-memory store, words will not be persisted");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = SqliteStore::connect(&config.database_url, config.max_connections).await?;
    Ok(Arc::new(store))
}
