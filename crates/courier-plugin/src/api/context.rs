//! The app context — the restricted capability surface handed to plugins.
//!
//! Plugins never see host UI internals. Each invocation gets a fresh
//! [`AppContext`] holding exactly two namespaces: the public `app`
//! surface and the host-internal `__private` escape hatch. The
//! interruptive capabilities (`alert`, `prompt`) are gated by the
//! context's [`InvocationPurpose`]; everything else delegates to the
//! collaborators unconditionally.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use courier_core::AppResult;

use crate::api::requests::{
    AlertPayload, AppInfo, DialogRequest, HostMetadata, PromptOptions, PromptRequest,
    SaveDialogOptions,
};
use crate::bridge::PromptResponder;
use crate::purpose::InvocationPurpose;

/// Plugin-facing names of the context namespaces.
pub const CONTEXT_NAMESPACES: [&str; 2] = ["app", "__private"];

/// Plugin-facing names of the `app` capabilities.
pub const APP_CAPABILITIES: [&str; 8] = [
    "alert",
    "clipboard",
    "dialog",
    "getPath",
    "getInfo",
    "prompt",
    "showGenericModalDialog",
    "showSaveDialog",
];

/// Plugin-facing names of the `app.clipboard` capabilities.
pub const CLIPBOARD_CAPABILITIES: [&str; 3] = ["clear", "readText", "writeText"];

/// Modal-rendering collaborator.
///
/// Owns dialog presentation and serialization (at most one interactive
/// dialog visible at a time). For prompts it must fire the request's
/// responder, treating the first of `complete`/`hide` as terminal.
#[async_trait]
pub trait ModalService: Send + Sync {
    /// Renders an alert. The return value is passed through to the
    /// caller unmodified.
    async fn show_alert(&self, payload: AlertPayload) -> AppResult<Value>;

    /// Renders a prompt. Settlement arrives later through the request's
    /// responder, not through this return value.
    async fn show_prompt(&self, request: PromptRequest) -> AppResult<()>;

    /// Renders a plain dialog.
    async fn show_dialog(&self, request: DialogRequest) -> AppResult<()>;

    /// Renders a generic modal dialog.
    async fn show_generic_modal_dialog(&self, request: DialogRequest) -> AppResult<()>;

    /// Renders a save-file dialog. `None` means the user cancelled.
    async fn show_save_dialog(&self, options: SaveDialogOptions) -> AppResult<Option<PathBuf>>;
}

/// System clipboard collaborator.
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Reads the clipboard as text.
    async fn read_text(&self) -> AppResult<String>;

    /// Writes text to the clipboard.
    async fn write_text(&self, text: &str) -> AppResult<()>;

    /// Clears the clipboard.
    async fn clear(&self) -> AppResult<()>;
}

/// Plugin data-directory resolution collaborator.
#[async_trait]
pub trait PathService: Send + Sync {
    /// Resolves a named plugin data location to a filesystem path.
    async fn resolve(&self, name: &str) -> AppResult<PathBuf>;
}

/// The collaborator set the capability layer delegates to.
#[derive(Clone)]
pub struct HostServices {
    /// Modal-dialog renderer.
    pub modal: Arc<dyn ModalService>,
    /// Clipboard primitive.
    pub clipboard: Arc<dyn ClipboardService>,
    /// Plugin data-directory resolver.
    pub paths: Arc<dyn PathService>,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish()
    }
}

/// Context handed to plugin code for a single invocation.
///
/// Built fresh per invocation and discarded when the call returns.
/// Construction is infallible and has no side effects.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// The public `app` capability surface.
    pub app: AppApi,
    /// The host-internal `__private` escape hatch. Not part of the
    /// stable plugin contract.
    pub private: PrivateApi,
}

impl AppContext {
    /// Plugin-facing names of the top-level namespaces.
    pub fn namespaces() -> &'static [&'static str] {
        &CONTEXT_NAMESPACES
    }

    /// The purpose this context was built for.
    pub fn purpose(&self) -> InvocationPurpose {
        self.app.purpose
    }
}

/// The public `app` namespace.
#[derive(Debug, Clone)]
pub struct AppApi {
    /// The `app.clipboard` namespace.
    pub clipboard: ClipboardApi,
    pub(crate) purpose: InvocationPurpose,
    pub(crate) services: HostServices,
    pub(crate) host: HostMetadata,
}

impl AppApi {
    pub(crate) fn new(
        purpose: InvocationPurpose,
        services: HostServices,
        host: HostMetadata,
    ) -> Self {
        Self {
            clipboard: ClipboardApi {
                clipboard: services.clipboard.clone(),
            },
            purpose,
            services,
            host,
        }
    }

    /// Plugin-facing names of the `app` capabilities.
    pub fn capabilities() -> &'static [&'static str] {
        &APP_CAPABILITIES
    }

    /// Shows an alert — only when this context's purpose is `send`.
    ///
    /// When suppressed, the modal collaborator is never called and the
    /// result is `None`. When active, the collaborator's return value is
    /// passed through unmodified.
    pub async fn alert(
        &self,
        title: impl Into<String>,
        message: Option<&str>,
    ) -> AppResult<Option<Value>> {
        if !self.purpose.is_send() {
            debug!(purpose = %self.purpose, "alert suppressed");
            return Ok(None);
        }

        let mut payload = AlertPayload::new(title);
        if let Some(message) = message {
            payload = payload.with_message(message);
        }

        let result = self.services.modal.show_alert(payload).await?;
        Ok(Some(result))
    }

    /// Shows a prompt and awaits its settlement — only when this
    /// context's purpose is `send`.
    ///
    /// When suppressed, resolves immediately with `None` and the modal
    /// collaborator is never called. When active, the collaborator is
    /// called exactly once; the prompt resolves with `Some(value)` on
    /// completion or `None` on dismissal. Suspension is unbounded —
    /// settlement is driven solely by the collaborator.
    pub async fn prompt(
        &self,
        title: impl Into<String>,
        options: PromptOptions,
    ) -> AppResult<Option<String>> {
        if !self.purpose.is_send() {
            debug!(purpose = %self.purpose, "prompt suppressed");
            return Ok(None);
        }

        let id = Uuid::new_v4();
        let (responder, settled) = PromptResponder::channel(id);
        let request = PromptRequest {
            id,
            title: title.into(),
            label: options.label,
            responder,
        };

        debug!(prompt_id = %id, "dispatching prompt");
        self.services.modal.show_prompt(request).await?;

        // A collaborator that drops the request without ever firing the
        // responder settles the prompt as dismissed.
        Ok(settled.await.unwrap_or(None))
    }

    /// Shows a plain dialog. Not purpose-gated.
    pub async fn dialog(&self, request: DialogRequest) -> AppResult<()> {
        self.services.modal.show_dialog(request).await
    }

    /// Shows a generic modal dialog. Not purpose-gated.
    pub async fn show_generic_modal_dialog(&self, request: DialogRequest) -> AppResult<()> {
        self.services.modal.show_generic_modal_dialog(request).await
    }

    /// Shows a save-file dialog. Not purpose-gated; `None` on cancel.
    pub async fn show_save_dialog(
        &self,
        options: SaveDialogOptions,
    ) -> AppResult<Option<PathBuf>> {
        self.services.modal.show_save_dialog(options).await
    }

    /// Resolves a named plugin data location. Not purpose-gated.
    pub async fn get_path(&self, name: &str) -> AppResult<PathBuf> {
        self.services.paths.resolve(name).await
    }

    /// Returns host metadata. Pure read: no collaborator call, no
    /// gating, no side effects.
    pub fn get_info(&self) -> AppInfo {
        self.host.info()
    }
}

/// The `app.clipboard` namespace. Delegates unconditionally.
#[derive(Clone)]
pub struct ClipboardApi {
    pub(crate) clipboard: Arc<dyn ClipboardService>,
}

impl std::fmt::Debug for ClipboardApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardApi").finish()
    }
}

impl ClipboardApi {
    /// Plugin-facing names of the clipboard capabilities.
    pub fn capabilities() -> &'static [&'static str] {
        &CLIPBOARD_CAPABILITIES
    }

    /// Reads the clipboard as text.
    pub async fn read_text(&self) -> AppResult<String> {
        self.clipboard.read_text().await
    }

    /// Writes text to the clipboard.
    pub async fn write_text(&self, text: &str) -> AppResult<()> {
        self.clipboard.write_text(text).await
    }

    /// Clears the clipboard.
    pub async fn clear(&self) -> AppResult<()> {
        self.clipboard.clear().await
    }
}

/// The `__private` namespace — host-internal escape hatch.
///
/// Kept as a separate type so the plugin-facing contract stays minimal;
/// nothing here is merged into [`AppApi`].
#[derive(Debug, Clone)]
pub struct PrivateApi {
    /// Raw collaborator handles.
    pub services: HostServices,
    /// The purpose the owning context was built for.
    pub purpose: InvocationPurpose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_names_are_exact() {
        assert_eq!(AppContext::namespaces(), &["app", "__private"]);
    }

    #[test]
    fn test_app_capability_names_are_exact() {
        let mut expected = vec![
            "alert",
            "clipboard",
            "dialog",
            "getPath",
            "getInfo",
            "prompt",
            "showGenericModalDialog",
            "showSaveDialog",
        ];
        expected.sort_unstable();
        let mut actual: Vec<&str> = AppApi::capabilities().to_vec();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_clipboard_capability_names_are_exact() {
        let mut actual: Vec<&str> = ClipboardApi::capabilities().to_vec();
        actual.sort_unstable();
        assert_eq!(actual, vec!["clear", "readText", "writeText"]);
    }
}
