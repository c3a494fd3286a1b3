//! # courier-plugin
//!
//! Capability-mediation layer for Courier plugins. Provides:
//!
//! - A restricted `app` context built fresh per plugin invocation
//! - Purpose gating for the interruptive capabilities (`alert`, `prompt`)
//! - A callback-to-awaitable bridge with exactly-once prompt settlement
//! - Collaborator trait contracts (modal renderer, clipboard, paths)
//! - Recording collaborator fakes in [`testing`]
//!
//! Plugin discovery and loading are out of scope; the host hands an
//! already-loaded plugin a context from [`ContextFactory`].

pub mod api;
pub mod bridge;
pub mod factory;
pub mod purpose;
pub mod testing;

pub use api::context::{
    APP_CAPABILITIES, AppApi, AppContext, CLIPBOARD_CAPABILITIES, CONTEXT_NAMESPACES,
    ClipboardApi, ClipboardService, HostServices, ModalService, PathService, PrivateApi,
};
pub use api::requests::{
    AlertPayload, AppInfo, DialogRequest, HostMetadata, PromptOptions, PromptRequest,
    SaveDialogOptions,
};
pub use api::services::DataDirPathService;
pub use bridge::PromptResponder;
pub use factory::ContextFactory;
pub use purpose::InvocationPurpose;
