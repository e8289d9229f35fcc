pub mod lemmatizer;
pub mod merriam_webster;
pub mod processor;
pub mod segmenter;
pub mod stopwords;

pub use lemmatizer::EnglishLemmatizer;
pub use merriam_webster::MerriamWebster;
pub use processor::EnglishProcessor;
pub use stopwords::StopWords;
