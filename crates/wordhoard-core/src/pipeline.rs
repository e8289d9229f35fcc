use std::sync::Arc;

use wordhoard_types::{Definition, RunSummary, VocabularyRecord};

use crate::dictionary::DefinitionSource;
use crate::error::{ProcessingError, StoreError};
use crate::extract::{Extraction, extract};
use crate::language::LanguageProcessor;
use crate::store::VocabularyStore;

/// Words inserted by one reconciliation pass, in first-sighting order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub inserted_words: Vec<String>,
    pub inserted_count: usize,
}

/// Insert every extracted word the store does not know yet.
///
/// Words are handled one at a time, in extraction order. Lookup misses,
/// store failures and duplicate-key races skip the word and never stop
/// the loop; each successful insert is committed on its own.
pub async fn reconcile(
    entries: &Extraction,
    store: &dyn VocabularyStore,
    source: &dyn DefinitionSource,
) -> Reconciliation {
    let mut inserted_words = Vec::new();

    for (word, sentence) in entries {
        match store.get(word).await {
            Ok(Some(_)) => {
                tracing::debug!(word = %word, "already known, skipping");
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(word = %word, "store lookup failed, skipping: {e}");
                continue;
            }
        }

        let definition = match source.define(word).await {
            Definition::Found(definition) => definition,
            Definition::NotFound => {
                tracing::debug!(word = %word, "no definition, skipping");
                continue;
            }
        };

        let record = VocabularyRecord::new(word.clone(), sentence.clone(), definition);
        match store.insert(record).await {
            Ok(()) => {
                tracing::debug!(word = %word, "inserted");
                inserted_words.push(word.clone());
            }
            Err(StoreError::Duplicate(_)) => {
                tracing::debug!(word = %word, "inserted concurrently, treating as known");
            }
            Err(e) => {
                tracing::warn!(word = %word, "insert failed, skipping: {e}");
            }
        }
    }

    Reconciliation {
        inserted_count: inserted_words.len(),
        inserted_words,
    }
}

/// Text -> new vocabulary records
#[derive(Clone)]
pub struct Pipeline {
    processor: Arc<dyn LanguageProcessor>,
    store: Arc<dyn VocabularyStore>,
    source: Arc<dyn DefinitionSource>,
}

impl Pipeline {
    pub fn new(
        processor: Arc<dyn LanguageProcessor>,
        store: Arc<dyn VocabularyStore>,
        source: Arc<dyn DefinitionSource>,
    ) -> Self {
        Self {
            processor,
            store,
            source,
        }
    }

    /// Run extraction and reconciliation over one text blob.
    ///
    /// `None` is rejected before anything is read or written; an empty
    /// string is a valid run that adds nothing.
    pub async fn run(&self, text: Option<&str>) -> Result<RunSummary, ProcessingError> {
        let text = text.ok_or(ProcessingError::MissingText)?;

        let entries = extract(self.processor.as_ref(), text);
        tracing::info!(
            language = self.processor.language_code(),
            candidates = entries.len(),
            "Extracted vocabulary candidates"
        );

        let result = reconcile(&entries, self.store.as_ref(), self.source.as_ref()).await;
        tracing::info!(new_words = result.inserted_count, "Processing complete");

        Ok(RunSummary {
            new_words_count: result.inserted_count,
            new_words: result.inserted_words,
        })
    }
}
