use std::collections::HashSet;

/// Tokens at or below this length are never vocabulary
pub const MIN_WORD_LEN: usize = 4;

/// High-frequency English words that are never worth learning
pub struct StopWords {
    words: HashSet<&'static str>,
}

impl StopWords {
    pub fn with_defaults() -> Self {
        let words = [
            "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
            "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
            "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
            "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
            "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
            "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
            "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
            "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
            "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
            "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
            "is", "was", "are", "been", "has", "had", "were", "said", "did", "having",
            "may", "should", "am",
        ];

        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Exact match; callers lowercase first
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Long enough and not a stop word
    pub fn is_candidate(&self, token: &str) -> bool {
        token.len() >= MIN_WORD_LEN && !self.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::with_defaults()
    }
}
