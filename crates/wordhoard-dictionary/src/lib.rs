mod audio;
mod entry;
mod gateway;

pub use audio::audio_url;
pub use entry::parse_definition;
pub use gateway::EnrichmentGateway;

/// Remote dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryService: Send + Sync {
    /// Fetch the raw response body for `word`
    async fn lookup(&self, word: &str) -> Result<serde_json::Value, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    /// Root of the pronunciation audio CDN
    pub audio_base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    ParseError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
