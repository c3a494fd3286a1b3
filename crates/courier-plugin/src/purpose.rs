//! Invocation purpose — why plugin code is being called.
//!
//! The purpose is fixed at context construction and gates whether the
//! interruptive capabilities (`alert`, `prompt`) reach the modal
//! collaborator at all. Everything else on the surface ignores it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the host is invoking plugin code.
///
/// A two-variant tagged mode rather than a boolean so that future
/// invocation contexts extend cleanly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationPurpose {
    /// Interactive editing or preview. Interruptive UI is suppressed.
    #[default]
    Default,
    /// An actual outbound send action. Interruptive UI renders.
    Send,
}

impl InvocationPurpose {
    /// Parse a purpose label. Total: anything that is not `"send"` maps
    /// to [`InvocationPurpose::Default`], the safe non-interactive mode.
    pub fn parse(label: &str) -> Self {
        match label {
            "send" => Self::Send,
            _ => Self::Default,
        }
    }

    /// Returns the string label of this purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Send => "send",
        }
    }

    /// Whether this purpose allows interruptive UI.
    pub fn is_send(&self) -> bool {
        matches!(self, Self::Send)
    }
}

impl fmt::Display for InvocationPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
