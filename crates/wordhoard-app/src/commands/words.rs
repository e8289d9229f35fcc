use serde_json::{Value, json};
use wordhoard_types::MediaKind;

use super::AttachArgs;
use crate::state::AppState;

pub async fn handle_list(state: &AppState) -> anyhow::Result<Value> {
    let words = state.store.list().await?;
    Ok(json!({ "words": words }))
}

pub async fn handle_show(state: &AppState, word: &str) -> anyhow::Result<Value> {
    match state.store.get(word).await? {
        Some(record) => Ok(json!({ "word": record })),
        None => anyhow::bail!("Word not found: {word}"),
    }
}

/// Deleting an unknown word succeeds. Media URLs of the removed record are
/// reported so the caller can release them from blob storage.
pub async fn handle_delete(state: &AppState, word: &str) -> anyhow::Result<Value> {
    let released: Vec<String> = match state.store.delete(word).await? {
        Some(record) => record.media_urls().into_iter().map(str::to_string).collect(),
        None => {
            tracing::debug!(word, "Nothing to delete");
            Vec::new()
        }
    };

    for url in &released {
        tracing::info!(word, url = %url, "Media released with deleted word");
    }

    Ok(json!({
        "message": "Word deleted successfully",
        "releasedMedia": released,
    }))
}

pub async fn handle_attach(state: &AppState, args: AttachArgs) -> anyhow::Result<Value> {
    let (kind, url) = match (args.image, args.audio) {
        (Some(url), _) => (MediaKind::Image, url),
        (None, Some(url)) => (MediaKind::Audio, url),
        (None, None) => anyhow::bail!("Either --image or --audio is required"),
    };

    state.store.attach_media(&args.word, kind, &url).await?;
    tracing::info!(word = %args.word, ?kind, "Attached media");

    Ok(json!({ "url": url }))
}
