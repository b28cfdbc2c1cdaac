//! Authentication gateway trait.
//!
//! Defines the interface to the external login widget and its locally
//! persisted session blob.

use super::model::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract gateway to the authentication service.
///
/// `current_session` and `clear_session` are synchronous and local-only;
/// `interactive_login` is the one operation in the system with an externally
/// driven completion signal: it suspends until the hosting UI completes,
/// abandons or fails the flow.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Reads the locally persisted session, if any. Never touches the
    /// network.
    fn current_session(&self) -> Result<Option<Identity>>;

    /// Runs the interactive login flow.
    ///
    /// On success the resolved identity has already been persisted locally
    /// by the gateway. On failure or abandonment nothing is persisted and
    /// the caller decides whether to re-offer the entry point.
    async fn interactive_login(&self) -> Result<Identity>;

    /// Discards the locally persisted session blob.
    fn clear_session(&self) -> Result<()>;
}
