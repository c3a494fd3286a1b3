//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Root directory under which per-plugin data directories are created.
    #[serde(default = "default_data_directory")]
    pub data_directory: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
        }
    }
}

fn default_data_directory() -> String {
    "./plugin-data".to_string()
}
