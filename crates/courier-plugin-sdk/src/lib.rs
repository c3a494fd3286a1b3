//! # courier-plugin-sdk
//!
//! SDK for developing Courier plugins.
//!
//! A plugin receives a fresh [`AppContext`](courier_plugin::AppContext)
//! for every invocation. The `app` namespace is the stable contract;
//! interruptive capabilities only render during an actual send.
//!
//! ## Quick Start
//!
//! ```rust
//! use courier_plugin_sdk::prelude::*;
//! use courier_plugin::testing::recording_services;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (services, modal, _clipboard) = recording_services();
//! let factory = ContextFactory::new(services, HostMetadata::from_build());
//!
//! // Preview invocation: prompts resolve immediately with no UI.
//! let preview = factory.build_default();
//! let answer = preview
//!     .app
//!     .prompt("API key", PromptOptions::with_label("Key"))
//!     .await
//!     .unwrap();
//! assert_eq!(answer, None);
//! assert!(modal.prompt_calls().is_empty());
//! # }
//! ```

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use courier_core::{AppError, AppResult};

    pub use courier_plugin::api::context::{
        AppApi, AppContext, ClipboardApi, ClipboardService, HostServices, ModalService,
        PathService, PrivateApi,
    };
    pub use courier_plugin::api::requests::{
        AlertPayload, AppInfo, DialogRequest, HostMetadata, PromptOptions, PromptRequest,
        SaveDialogOptions,
    };
    pub use courier_plugin::api::services::DataDirPathService;
    pub use courier_plugin::bridge::PromptResponder;
    pub use courier_plugin::factory::ContextFactory;
    pub use courier_plugin::purpose::InvocationPurpose;
}
