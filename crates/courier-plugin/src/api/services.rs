//! Default implementations of collaborator traits owned by the host.
//!
//! The modal and clipboard collaborators live in the host UI layer and
//! stay abstract here; path resolution has a filesystem-backed default.

use std::path::PathBuf;

use async_trait::async_trait;

use courier_core::config::plugin::PluginConfig;
use courier_core::{AppError, AppResult};

use super::context::PathService;

/// Named plugin data locations resolvable through `getPath`.
const KNOWN_LOCATIONS: [&str; 3] = ["data", "cache", "temp"];

/// Path resolver rooted at the configured plugin data directory.
///
/// Each plugin gets an isolated subtree keyed by its id, so one plugin
/// cannot resolve paths inside another's data.
#[derive(Debug, Clone)]
pub struct DataDirPathService {
    /// Root of all plugin data directories.
    root: PathBuf,
    /// Owning plugin id.
    plugin_id: String,
}

impl DataDirPathService {
    /// Creates a path service for one plugin.
    pub fn new(config: &PluginConfig, plugin_id: &str) -> Self {
        Self {
            root: PathBuf::from(&config.data_directory),
            plugin_id: plugin_id.to_string(),
        }
    }
}

#[async_trait]
impl PathService for DataDirPathService {
    async fn resolve(&self, name: &str) -> AppResult<PathBuf> {
        if !KNOWN_LOCATIONS.contains(&name) {
            return Err(AppError::not_found(format!(
                "unknown plugin data location '{name}'"
            )));
        }
        Ok(self.root.join(&self.plugin_id).join(name))
    }
}
