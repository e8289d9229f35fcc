use serde_json::Value;
use wordhoard_types::Definition;

use crate::state::AppState;

pub async fn handle_define(state: &AppState, word: &str) -> anyhow::Result<Value> {
    match state.source.define(word).await {
        Definition::Found(result) => Ok(serde_json::to_value(result)?),
        Definition::NotFound => anyhow::bail!("Word not found: {word}"),
    }
}
