use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::export::ExportConfig;
use self::store::StoreConfig;

pub mod dictionary;
pub mod export;
pub mod store;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub store: StoreConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment always wins over values read from a config file
    pub fn apply_env(&mut self) {
        self.dictionary.apply_env();
        self.store.apply_env();
        self.export.apply_env();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "store": { "database_url": "memory" } }"#).unwrap();

        assert!(config.store.is_memory());
        assert_eq!(config.store.max_connections, 1);
        assert_eq!(
            config.dictionary.api_url,
            "https://www.dictionaryapi.com/api/v3/references/collegiate/json"
        );
        assert_eq!(config.dictionary.timeout_seconds, 10);
        assert_eq!(config.export.output_dir, ".");
    }

    #[test]
    fn empty_json_is_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert!(config.dictionary.api_key.is_empty());
        assert_eq!(config.store.database_url, "sqlite://wordhoard.db");
        assert!(!config.store.is_memory());
    }
}
