pub mod types;

pub use types::{
    Definition, DefinitionResult, MediaKind, RunSummary, VocabularyRecord, WordSummary,
};
