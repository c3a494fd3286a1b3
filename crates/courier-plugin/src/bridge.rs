//! Callback-to-awaitable bridge for prompt settlement.
//!
//! The modal collaborator works in callbacks: it renders a prompt and
//! later fires "completed with a value" or "hidden without one". The
//! bridge turns that pair into a single awaitable with first-settlement-
//! wins semantics: the responder holds the `oneshot` sender in a
//! single-assignment slot, and whichever callback fires first takes it.
//! Every later firing finds the slot empty and is a no-op.

use std::fmt;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tracing::{debug, warn};
use uuid::Uuid;

/// Settlement handle injected into every prompt request.
///
/// Cloneable so the collaborator can hand the two outcomes to different
/// closures; all clones share the same settlement slot. A dismissed
/// prompt is not an error — `hide` settles with `None`.
#[derive(Clone)]
pub struct PromptResponder {
    /// Prompt request id, for log correlation.
    id: Uuid,
    /// Single-assignment slot. `None` once settled.
    slot: Arc<Mutex<Option<oneshot::Sender<Option<String>>>>>,
}

impl PromptResponder {
    /// Creates a responder and the receiver its settlement arrives on.
    pub fn channel(id: Uuid) -> (Self, oneshot::Receiver<Option<String>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                id,
                slot: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    /// The prompt request id this responder settles.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Settles the prompt with the entered value.
    ///
    /// No-op if the prompt already settled.
    pub fn complete(&self, value: impl Into<String>) {
        self.settle(Some(value.into()), "complete");
    }

    /// Settles the prompt as dismissed.
    ///
    /// No-op if the prompt already settled.
    pub fn hide(&self) {
        self.settle(None, "hide");
    }

    /// Whether this prompt has already settled.
    pub fn is_settled(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_none()).unwrap_or(true)
    }

    fn settle(&self, value: Option<String>, origin: &'static str) {
        let sender = match self.slot.lock() {
            Ok(mut slot) => slot.take(),
            // A panicked settler cannot have sent; treat as settled.
            Err(_) => None,
        };

        match sender {
            Some(tx) => {
                debug!(prompt_id = %self.id, origin, "prompt settled");
                // The awaiting side may be gone; that is not our problem.
                let _ = tx.send(value);
            }
            None => {
                warn!(
                    prompt_id = %self.id,
                    origin,
                    "ignoring settlement after prompt already settled"
                );
            }
        }
    }
}

impl fmt::Debug for PromptResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptResponder")
            .field("id", &self.id)
            .field("settled", &self.is_settled())
            .finish()
    }
}
