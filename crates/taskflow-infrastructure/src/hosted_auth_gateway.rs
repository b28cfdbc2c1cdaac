//! Widget-driven authentication gateway.
//!
//! The hosted login widget completes through callbacks it invokes on success
//! or error. Each `interactive_login` call is modeled as a single-shot
//! [`LoginAttempt`] handle handed to the embedding UI; whichever callback the
//! widget fires settles the handle, and it settles exactly once.

use crate::session_storage::SessionStorage;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use taskflow_core::auth::{AuthGateway, Identity};
use taskflow_core::error::{FlowError, Result};
use tokio::sync::oneshot;

type LoginOutcome = std::result::Result<Identity, String>;

/// Callback through which the presentation layer is asked to show the login
/// widget for a pending attempt.
pub type LoginPrompt = Arc<dyn Fn(Arc<LoginAttempt>) + Send + Sync>;

/// A pending interactive login.
///
/// The embedding UI wires the widget's success callback to [`complete`] and
/// its error callback to [`fail`]. Dropping the handle without settling it
/// marks the flow as abandoned.
///
/// [`complete`]: LoginAttempt::complete
/// [`fail`]: LoginAttempt::fail
pub struct LoginAttempt {
    sender: Mutex<Option<oneshot::Sender<LoginOutcome>>>,
}

impl LoginAttempt {
    fn new(sender: oneshot::Sender<LoginOutcome>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Settles the attempt with the resolved identity.
    pub fn complete(&self, identity: Identity) {
        self.settle(Ok(identity));
    }

    /// Settles the attempt with an error message.
    pub fn fail(&self, message: impl Into<String>) {
        self.settle(Err(message.into()));
    }

    fn settle(&self, outcome: LoginOutcome) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match sender {
            // The receiver side may already be gone when the surrounding UI
            // was dismissed; nothing left to notify then.
            Some(sender) => {
                let _ = sender.send(outcome);
            }
            None => tracing::warn!("login attempt already settled; ignoring late callback"),
        }
    }
}

/// Authentication gateway over the hosted widget plus the local session blob.
pub struct HostedAuthGateway {
    storage: SessionStorage,
    prompt: LoginPrompt,
}

impl HostedAuthGateway {
    /// Creates a gateway. `prompt` is invoked with the attempt handle every
    /// time an interactive login starts.
    pub fn new(storage: SessionStorage, prompt: LoginPrompt) -> Self {
        Self { storage, prompt }
    }
}

#[async_trait]
impl AuthGateway for HostedAuthGateway {
    fn current_session(&self) -> Result<Option<Identity>> {
        self.storage.load()
    }

    async fn interactive_login(&self) -> Result<Identity> {
        let (sender, receiver) = oneshot::channel();
        let attempt = Arc::new(LoginAttempt::new(sender));
        (self.prompt)(attempt);
        match receiver.await {
            Ok(Ok(identity)) => {
                // Persist before resolving so a reload right after login
                // still restores the session.
                self.storage.store(&identity)?;
                Ok(identity)
            }
            Ok(Err(message)) => {
                tracing::warn!(error = %message, "interactive login failed");
                Err(FlowError::service(message))
            }
            Err(_) => Err(FlowError::service(
                "login flow was dismissed before completing",
            )),
        }
    }

    fn clear_session(&self) -> Result<()> {
        self.storage.clear()
    }
}
