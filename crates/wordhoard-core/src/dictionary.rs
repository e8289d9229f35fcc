use wordhoard_types::Definition;

/// Enrichment capability used by reconciliation.
///
/// Implementations never fail: every lookup problem is reported as
/// [`Definition::NotFound`] so a single word cannot abort a run.
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn define(&self, word: &str) -> Definition;
}
