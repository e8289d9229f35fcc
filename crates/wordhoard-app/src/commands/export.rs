use std::path::PathBuf;

use serde_json::{Value, json};

use crate::state::AppState;

pub async fn handle_export(state: &AppState, out: Option<PathBuf>) -> anyhow::Result<Value> {
    let dir = out.unwrap_or_else(|| PathBuf::from(&state.config.export.output_dir));
    let records = state.store.all().await?;

    let path = wordhoard_export::export_to_dir(&records, &dir)?;

    Ok(json!({
        "path": path.display().to_string(),
        "rows": records.len(),
    }))
}
