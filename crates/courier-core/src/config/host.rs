//! Host application identity configuration.

use serde::{Deserialize, Serialize};

/// Host application identity settings.
///
/// Both fields are optional overrides. When absent, the capability layer
/// reports the values compiled into the host binary (package version and
/// the running OS identifier).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Semantic version string reported to plugins.
    #[serde(default)]
    pub version: Option<String>,
    /// OS identifier string reported to plugins.
    #[serde(default)]
    pub platform: Option<String>,
}
