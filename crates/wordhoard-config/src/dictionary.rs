use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://www.dictionaryapi.com/api/v3/references/collegiate/json".to_string()
}

fn default_audio_base_url() -> String {
    "https://media.merriam-webster.com/audio/prons".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Merriam-Webster collegiate API key
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Root of the pronunciation audio CDN
    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            audio_base_url: default_audio_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl DictionaryConfig {
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("MW_DICTIONARY_KEY") {
            self.api_key = key;
        }
        if let Ok(url) = env::var("MW_API_URL") {
            self.api_url = url;
        }
        if let Ok(url) = env::var("MW_AUDIO_BASE_URL") {
            self.audio_base_url = url;
        }
        if let Some(timeout) = env::var("LOOKUP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_seconds = timeout;
        }
    }
}
