use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordhoard_config::Config;

/// Config file picked up from the working directory when none is given
const DEFAULT_CONFIG_FILE: &str = "config.json";

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load config from `path`, else `./config.json`, else defaults.
/// Environment variables are applied last.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => load_config_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            load_config_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => {
            tracing::debug!("No config file, using defaults");
            Config::default()
        }
    };

    config.apply_env();
    Ok(config)
}
