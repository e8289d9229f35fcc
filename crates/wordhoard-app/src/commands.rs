use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::state::AppState;

pub mod define;
pub mod export;
pub mod process;
pub mod words;

use define::handle_define;
use export::handle_export;
use process::handle_process;
use words::{handle_attach, handle_delete, handle_list, handle_show};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract new vocabulary from a text file, --text or stdin
    Process {
        file: Option<PathBuf>,
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },
    /// Look up a single word without saving it
    Define { word: String },
    /// List saved words
    List,
    /// Show one saved word
    Show { word: String },
    /// Delete a saved word
    Delete { word: String },
    /// Attach a user image or audio URL to a saved word
    Attach(AttachArgs),
    /// Export saved words to CSV
    Export {
        /// Output directory (defaults to EXPORT_DIR or .)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct AttachArgs {
    pub word: String,
    #[arg(long, required_unless_present = "audio", conflicts_with = "audio")]
    pub image: Option<String>,
    #[arg(long)]
    pub audio: Option<String>,
}

/// Run one CLI command, returning the JSON printed to stdout
pub async fn handle_command(state: &AppState, command: Command) -> anyhow::Result<Value> {
    tracing::debug!(?command, "Handling command");
    match command {
        Command::Process { file, text } => handle_process(state, file, text).await,
        Command::Define { word } => handle_define(state, &word).await,
        Command::List => handle_list(state).await,
        Command::Show { word } => handle_show(state, &word).await,
        Command::Delete { word } => handle_delete(state, &word).await,
        Command::Attach(args) => handle_attach(state, args).await,
        Command::Export { out } => handle_export(state, out).await,
    }
}
