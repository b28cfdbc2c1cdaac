//! Auth store: tracks the authenticated principal and session status.
//!
//! Login attempts are serialized; session restore runs once at startup,
//! before interactive login is offered, so the persisted blob is never
//! read and written concurrently.

use std::sync::Arc;
use taskflow_core::auth::{AuthGateway, AuthStatus, Identity};
use taskflow_core::error::Result;
use tokio::sync::{Mutex, RwLock};

#[derive(Default)]
struct AuthState {
    identity: Option<Identity>,
    status: AuthStatus,
    last_error: Option<String>,
}

/// In-memory cache of the authenticated-user identity.
pub struct AuthStore {
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<AuthState>,
    /// Held across the whole interactive flow so a second `login` call
    /// waits instead of opening a second widget.
    login_gate: Mutex<()>,
}

impl AuthStore {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(AuthState::default()),
            login_gate: Mutex::new(()),
        }
    }

    /// Restores the session from locally persisted data.
    ///
    /// Never rejects: a read failure is treated as "no session" and leaves
    /// the store idle and unauthenticated.
    pub async fn restore_session(&self) -> Option<Identity> {
        let restored = match self.gateway.current_session() {
            Ok(Some(identity)) if identity.is_present() => Some(identity),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "session restore failed, treating as no session");
                None
            }
        };
        let mut state = self.state.write().await;
        match restored {
            Some(identity) => {
                state.identity = Some(identity.clone());
                state.status = AuthStatus::Succeeded;
                state.last_error = None;
                Some(identity)
            }
            None => {
                state.identity = None;
                state.status = AuthStatus::Idle;
                None
            }
        }
    }

    /// Runs the interactive login flow.
    ///
    /// On success the identity is cached (the gateway has already persisted
    /// it). On failure no identity is cached, the status turns `Failed` and
    /// the attempt is independently retryable. A call that was queued behind
    /// a successful login reuses its identity instead of re-opening the
    /// widget.
    pub async fn login(&self) -> Result<Identity> {
        let _serialized = self.login_gate.lock().await;
        if let Some(identity) = self.identity().await {
            return Ok(identity);
        }
        {
            let mut state = self.state.write().await;
            state.status = AuthStatus::Loading;
        }
        match self.gateway.interactive_login().await {
            Ok(identity) => {
                let mut state = self.state.write().await;
                state.identity = Some(identity.clone());
                state.status = AuthStatus::Succeeded;
                state.last_error = None;
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                let mut state = self.state.write().await;
                state.identity = None;
                state.status = AuthStatus::Failed;
                state.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Clears the persisted session data and the cached identity.
    ///
    /// Always succeeds from the caller's perspective; a failure to remove
    /// the persisted blob is logged, the in-memory state is reset
    /// regardless of prior status.
    pub async fn logout(&self) {
        if let Err(e) = self.gateway.clear_session() {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
        let mut state = self.state.write().await;
        state.identity = None;
        state.status = AuthStatus::Idle;
        state.last_error = None;
    }

    /// Authenticated iff a present identity is cached.
    pub async fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .await
            .identity
            .as_ref()
            .is_some_and(Identity::is_present)
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }

    pub async fn status(&self) -> AuthStatus {
        self.state.read().await.status
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }
}
