use std::env;

use serde::{Deserialize, Serialize};

/// Database URL that selects the in-memory store
pub const MEMORY_STORE: &str = "memory";

fn default_database_url() -> String {
    "sqlite://wordhoard.db".to_string()
}

fn default_max_connections() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl StoreConfig {
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var("WORDHOARD_DATABASE_URL") {
            self.database_url = url;
        }
    }

    pub fn is_memory(&self) -> bool {
        self.database_url == MEMORY_STORE
    }
}
