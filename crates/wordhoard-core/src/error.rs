/// Run-level failure. Raised before any store or dictionary access.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("No text provided")]
    MissingText,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Word already exists: {0}")]
    Duplicate(String),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
