use wordhoard_core::DefinitionSource;
use wordhoard_types::Definition;

use crate::entry::parse_definition;
use crate::{DictionaryService, LookupError};

/// Turns raw dictionary responses into [`Definition`]s
pub struct EnrichmentGateway<D> {
    service: D,
    audio_base_url: String,
}

impl<D: DictionaryService> EnrichmentGateway<D> {
    pub fn new(service: D) -> Self {
        let audio_base_url = service.metadata().audio_base_url;
        Self {
            service,
            audio_base_url,
        }
    }

    /// Look up `word`, keeping transport and parse failures visible
    pub async fn lookup(&self, word: &str) -> Result<Definition, LookupError> {
        let body = self.service.lookup(word).await?;
        parse_definition(&body, &self.audio_base_url)
    }
}

#[async_trait::async_trait]
impl<D: DictionaryService> DefinitionSource for EnrichmentGateway<D> {
    async fn define(&self, word: &str) -> Definition {
        match self.lookup(word).await {
            Ok(definition) => definition,
            Err(e) => {
                let provider = self.service.metadata().name;
                tracing::warn!(provider = %provider, "Error fetching definition for {word}: {e}");
                Definition::NotFound
            }
        }
    }
}
