use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized dictionary data for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionResult {
    pub definition: String,
    pub pronunciation: String,
    pub audio_url: Option<String>,
}

/// Outcome of a definition lookup.
///
/// Empty responses, placeholder suggestions and transport failures all
/// collapse into `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Found(DefinitionResult),
    NotFound,
}

impl Definition {
    pub fn found(self) -> Option<DefinitionResult> {
        match self {
            Definition::Found(result) => Some(result),
            Definition::NotFound => None,
        }
    }
}

/// A persisted vocabulary entry, keyed by `word`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRecord {
    pub word: String,
    pub definition: String,
    pub pronunciation: String,
    pub example_sentence: String,
    pub audio_url: Option<String>,
    pub date_added: DateTime<Utc>,
    pub user_image_url: Option<String>,
    pub user_audio_url: Option<String>,
}

impl VocabularyRecord {
    /// Build a fresh record with no user media attached
    pub fn new(word: String, example_sentence: String, definition: DefinitionResult) -> Self {
        Self {
            word,
            definition: definition.definition,
            pronunciation: definition.pronunciation,
            example_sentence,
            audio_url: definition.audio_url,
            date_added: Utc::now(),
            user_image_url: None,
            user_audio_url: None,
        }
    }

    /// User media URLs that must be released when the record goes away
    pub fn media_urls(&self) -> Vec<&str> {
        [self.user_image_url.as_deref(), self.user_audio_url.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Listing view of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSummary {
    pub word: String,
    pub definition: String,
    pub pronunciation: String,
    pub date_added: DateTime<Utc>,
}

impl From<&VocabularyRecord> for WordSummary {
    fn from(record: &VocabularyRecord) -> Self {
        Self {
            word: record.word.clone(),
            definition: record.definition.clone(),
            pronunciation: record.pronunciation.clone(),
            date_added: record.date_added,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
}

/// Result of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub new_words_count: usize,
    pub new_words: Vec<String>,
}

impl RunSummary {
    pub fn new(new_words: Vec<String>) -> Self {
        Self {
            new_words_count: new_words.len(),
            new_words,
        }
    }
}
