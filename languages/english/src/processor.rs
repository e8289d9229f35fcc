use wordhoard_core::language::{LanguageProcessor, Token};

use crate::lemmatizer::EnglishLemmatizer;
use crate::segmenter;
use crate::stopwords::StopWords;

/// English language processor
pub struct EnglishProcessor {
    stop_words: StopWords,
    lemmatizer: EnglishLemmatizer,
}

impl EnglishProcessor {
    pub fn new() -> Self {
        let stop_words = StopWords::with_defaults();
        tracing::debug!("Loaded {} stop words", stop_words.len());

        Self {
            stop_words,
            lemmatizer: EnglishLemmatizer::new(),
        }
    }
}

impl Default for EnglishProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        segmenter::segment(text)
    }

    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        segmenter::tokenize(sentence)
    }

    fn is_candidate(&self, token: &str) -> bool {
        self.stop_words.is_candidate(token)
    }

    fn lemmatize(&self, token: &str) -> String {
        self.lemmatizer.lemmatize(token)
    }
}
