use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use wordhoard_config::dictionary::DictionaryConfig;
use wordhoard_dictionary::{DictionaryService, LookupError, ProviderMetadata};

/// Merriam-Webster collegiate dictionary client
#[derive(Clone)]
pub struct MerriamWebster {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    audio_base_url: String,
}

impl MerriamWebster {
    pub fn new(config: &DictionaryConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            audio_base_url: config.audio_base_url.clone(),
        })
    }

    /// `<api_url>/<word>?key=<api_key>`
    fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| LookupError::ApiError(format!("Invalid API URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::ApiError("API URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(word);
        url.query_pairs_mut().append_pair("key", &self.api_key);

        Ok(url)
    }
}

#[async_trait]
impl DictionaryService for MerriamWebster {
    async fn lookup(&self, word: &str) -> Result<serde_json::Value, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::AuthenticationError);
        }

        let url = self.entry_url(word)?;
        tracing::debug!(word, "Fetching definition");

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimitExceeded),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(LookupError::AuthenticationError);
            }
            status if !status.is_success() => {
                return Err(LookupError::ApiError(format!("HTTP {status}")));
            }
            _ => {}
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::ParseError(format!("Failed to parse response: {e}")))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Merriam-Webster".to_string(),
            requires_api_key: true,
            audio_base_url: self.audio_base_url.clone(),
        }
    }
}
