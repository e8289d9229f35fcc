pub mod dictionary;
pub mod error;
pub mod extract;
pub mod language;
pub mod pipeline;
pub mod store;

pub use dictionary::DefinitionSource;
pub use error::{ProcessingError, StoreError};
pub use extract::{Extraction, extract};
pub use language::{LanguageProcessor, Token};
pub use pipeline::{Pipeline, Reconciliation, reconcile};
pub use store::VocabularyStore;

#[cfg(test)]
mod test_support;
