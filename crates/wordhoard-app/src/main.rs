use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::commands::{Command, handle_command};
use self::state::AppState;

/// Collect vocabulary from text into a personal word list
#[derive(Parser)]
#[command(name = "wordhoard", version)]
struct Cli {
    /// JSON config file (defaults to ./config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::new(config).await?;

    let output = handle_command(&state, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
