//! Recording collaborator fakes for tests.
//!
//! Shipped as a public module so plugin authors can exercise their code
//! against the capability surface without a real host UI. Every call is
//! recorded; prompt requests keep their responders so tests can drive
//! settlement by hand.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use courier_core::AppResult;
use courier_core::config::plugin::PluginConfig;

use crate::api::context::{ClipboardService, HostServices, ModalService};
use crate::api::requests::{AlertPayload, DialogRequest, PromptRequest, SaveDialogOptions};
use crate::api::services::DataDirPathService;

/// Modal collaborator that records every call and never renders.
#[derive(Debug, Default)]
pub struct RecordingModal {
    alert_calls: Mutex<Vec<AlertPayload>>,
    prompt_calls: Mutex<Vec<PromptRequest>>,
    dialog_calls: Mutex<Vec<DialogRequest>>,
    generic_dialog_calls: Mutex<Vec<DialogRequest>>,
    save_dialog_calls: Mutex<Vec<SaveDialogOptions>>,
    alert_return: Mutex<Value>,
    save_path: Mutex<Option<PathBuf>>,
}

impl RecordingModal {
    /// Creates a recording modal with `null` alert return and no save path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value `show_alert` returns.
    pub fn set_alert_return(&self, value: Value) {
        *self.alert_return.lock().unwrap() = value;
    }

    /// Sets the path `show_save_dialog` returns.
    pub fn set_save_path(&self, path: Option<PathBuf>) {
        *self.save_path.lock().unwrap() = path;
    }

    /// All recorded alert payloads.
    pub fn alert_calls(&self) -> Vec<AlertPayload> {
        self.alert_calls.lock().unwrap().clone()
    }

    /// All recorded prompt requests, responders included.
    pub fn prompt_calls(&self) -> Vec<PromptRequest> {
        self.prompt_calls.lock().unwrap().clone()
    }

    /// All recorded plain-dialog requests.
    pub fn dialog_calls(&self) -> Vec<DialogRequest> {
        self.dialog_calls.lock().unwrap().clone()
    }

    /// All recorded generic-modal-dialog requests.
    pub fn generic_dialog_calls(&self) -> Vec<DialogRequest> {
        self.generic_dialog_calls.lock().unwrap().clone()
    }

    /// All recorded save-dialog options.
    pub fn save_dialog_calls(&self) -> Vec<SaveDialogOptions> {
        self.save_dialog_calls.lock().unwrap().clone()
    }

    /// Total calls across every modal surface.
    pub fn total_calls(&self) -> usize {
        self.alert_calls.lock().unwrap().len()
            + self.prompt_calls.lock().unwrap().len()
            + self.dialog_calls.lock().unwrap().len()
            + self.generic_dialog_calls.lock().unwrap().len()
            + self.save_dialog_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModalService for RecordingModal {
    async fn show_alert(&self, payload: AlertPayload) -> AppResult<Value> {
        self.alert_calls.lock().unwrap().push(payload);
        Ok(self.alert_return.lock().unwrap().clone())
    }

    async fn show_prompt(&self, request: PromptRequest) -> AppResult<()> {
        self.prompt_calls.lock().unwrap().push(request);
        Ok(())
    }

    async fn show_dialog(&self, request: DialogRequest) -> AppResult<()> {
        self.dialog_calls.lock().unwrap().push(request);
        Ok(())
    }

    async fn show_generic_modal_dialog(&self, request: DialogRequest) -> AppResult<()> {
        self.generic_dialog_calls.lock().unwrap().push(request);
        Ok(())
    }

    async fn show_save_dialog(&self, options: SaveDialogOptions) -> AppResult<Option<PathBuf>> {
        self.save_dialog_calls.lock().unwrap().push(options);
        Ok(self.save_path.lock().unwrap().clone())
    }
}

/// In-memory clipboard collaborator.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<String>,
}

impl MemoryClipboard {
    /// Creates an empty in-memory clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard contents.
    pub fn contents(&self) -> String {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardService for MemoryClipboard {
    async fn read_text(&self) -> AppResult<String> {
        Ok(self.contents.lock().unwrap().clone())
    }

    async fn write_text(&self, text: &str) -> AppResult<()> {
        *self.contents.lock().unwrap() = text.to_string();
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.contents.lock().unwrap().clear();
        Ok(())
    }
}

/// Builds a recording collaborator set plus handles to the fakes.
pub fn recording_services() -> (HostServices, Arc<RecordingModal>, Arc<MemoryClipboard>) {
    let modal = Arc::new(RecordingModal::new());
    let clipboard = Arc::new(MemoryClipboard::new());
    let paths = Arc::new(DataDirPathService::new(
        &PluginConfig::default(),
        "test-plugin",
    ));

    let services = HostServices {
        modal: modal.clone(),
        clipboard: clipboard.clone(),
        paths,
    };
    (services, modal, clipboard)
}
