use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use serde_json::{Value, json};

use crate::state::AppState;

/// Inline text, then file, then piped stdin. An interactive stdin counts
/// as no input.
fn read_input(file: Option<PathBuf>, text: Option<String>) -> anyhow::Result<Option<String>> {
    if let Some(text) = text {
        return Ok(Some(text));
    }

    if let Some(path) = file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(Some(content));
    }

    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    Ok(Some(content))
}

pub async fn handle_process(
    state: &AppState,
    file: Option<PathBuf>,
    text: Option<String>,
) -> anyhow::Result<Value> {
    let input = read_input(file, text)?;
    tracing::debug!(chars = input.as_ref().map(|t| t.len()), "Processing text");

    let summary = state.pipeline.run(input.as_deref()).await?;

    Ok(json!({
        "message": "Processing complete",
        "newWordsCount": summary.new_words_count,
        "newWords": summary.new_words,
    }))
}
