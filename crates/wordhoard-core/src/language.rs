/// Text segmentation and normalization interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", ...)
    fn language_code(&self) -> &str;

    /// Split raw text into sentences, in document order
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Break a sentence into word tokens, in order
    fn tokenize(&self, sentence: &str) -> Vec<Token>;

    /// Whether a token is worth learning (not too short, not a common word)
    fn is_candidate(&self, token: &str) -> bool;

    /// Map a candidate token to the base form used as storage key
    fn lemmatize(&self, token: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset in the lowercased sentence
    pub position: usize,
}
