use std::env;

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl ExportConfig {
    pub fn apply_env(&mut self) {
        if let Ok(dir) = env::var("EXPORT_DIR") {
            self.output_dir = dir;
        }
    }
}
