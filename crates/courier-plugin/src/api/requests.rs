//! Typed payloads exchanged with the modal collaborator and host metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::bridge::PromptResponder;

/// Payload for [`ModalService::show_alert`](crate::api::context::ModalService::show_alert).
///
/// Serialization omits `message` entirely when absent; a missing key and
/// an empty message are different things to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Alert title.
    pub title: String,
    /// Optional body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AlertPayload {
    /// Creates a title-only alert payload.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }

    /// Sets the body text.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Caller-facing prompt configuration.
///
/// There are deliberately no completion-hook fields here: the bridge
/// always injects its own [`PromptResponder`], so callers cannot supply
/// (or override) the settlement mechanism.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOptions {
    /// Display label override for the input field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PromptOptions {
    /// Creates options with a display label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// Request handed to [`ModalService::show_prompt`](crate::api::context::ModalService::show_prompt).
///
/// The collaborator renders the prompt and fires the responder exactly
/// once: `complete` with the entered value, or `hide` on dismissal.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    /// Request id for log correlation.
    pub id: Uuid,
    /// Prompt title.
    pub title: String,
    /// Display label override, if any.
    pub label: Option<String>,
    /// Settlement handle injected by the bridge.
    pub responder: PromptResponder,
}

/// Request for the generic dialog surfaces (`dialog`,
/// `showGenericModalDialog`). The options shape belongs to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    /// Dialog title.
    pub title: String,
    /// Opaque renderer options.
    #[serde(default)]
    pub options: Value,
}

impl DialogRequest {
    /// Creates a dialog request with no options.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Value::Null,
        }
    }

    /// Sets the opaque renderer options.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// Options for the save-file dialog. Contract owned by the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDialogOptions {
    /// Dialog title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Suggested file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file_name: Option<String>,
}

/// Host application metadata reported to plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Semantic version string of the host.
    pub version: String,
    /// OS identifier of the running host process.
    pub platform: String,
}

/// Static host identity captured by the context factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMetadata {
    /// Semantic version string from the host package descriptor.
    pub version: String,
    /// OS identifier string of the running process.
    pub platform: String,
}

impl HostMetadata {
    /// Creates host metadata from explicit values.
    pub fn new(version: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            platform: platform.into(),
        }
    }

    /// Host metadata from compile-time package version and the running OS.
    pub fn from_build() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"), std::env::consts::OS)
    }

    /// Host metadata from configuration, falling back to build values
    /// for fields the configuration does not override.
    pub fn from_config(config: &courier_core::config::host::HostConfig) -> Self {
        let build = Self::from_build();
        Self {
            version: config.version.clone().unwrap_or(build.version),
            platform: config.platform.clone().unwrap_or(build.platform),
        }
    }

    /// The [`AppInfo`] snapshot reported through `getInfo`.
    pub fn info(&self) -> AppInfo {
        AppInfo {
            version: self.version.clone(),
            platform: self.platform.clone(),
        }
    }
}
