//! Context factory — builds an [`AppContext`] per plugin invocation.

use crate::api::context::{AppApi, AppContext, HostServices, PrivateApi};
use crate::api::requests::HostMetadata;
use crate::purpose::InvocationPurpose;

/// Builds per-invocation app contexts over a fixed collaborator set.
///
/// Construction of a context never fails and performs no collaborator
/// calls; all side effects are deferred to method invocation. Contexts
/// share the collaborators behind `Arc` but own their purpose, so
/// concurrent contexts never interfere.
#[derive(Debug, Clone)]
pub struct ContextFactory {
    services: HostServices,
    host: HostMetadata,
}

impl ContextFactory {
    /// Creates a factory over the host's collaborator set.
    pub fn new(services: HostServices, host: HostMetadata) -> Self {
        Self { services, host }
    }

    /// Builds a context for the given purpose.
    pub fn build(&self, purpose: InvocationPurpose) -> AppContext {
        AppContext {
            app: AppApi::new(purpose, self.services.clone(), self.host.clone()),
            private: PrivateApi {
                services: self.services.clone(),
                purpose,
            },
        }
    }

    /// Builds a context for the non-sending default purpose.
    pub fn build_default(&self) -> AppContext {
        self.build(InvocationPurpose::Default)
    }

    /// Builds a context from a purpose label. Unrecognized labels are
    /// treated as the non-sending default.
    pub fn build_for(&self, label: &str) -> AppContext {
        self.build(InvocationPurpose::parse(label))
    }
}
