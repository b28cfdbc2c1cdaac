//! Scripted authentication gateway.
//!
//! Resolves logins immediately with a configured outcome. Suitable for
//! tests and for offline development together with [`MemoryTaskGateway`].
//!
//! [`MemoryTaskGateway`]: crate::memory_task_gateway::MemoryTaskGateway

use crate::session_storage::SessionStorage;
use async_trait::async_trait;
use taskflow_core::auth::{AuthGateway, Identity};
use taskflow_core::error::{FlowError, Result};

/// Auth gateway with a scripted login outcome.
pub struct StaticAuthGateway {
    storage: SessionStorage,
    outcome: std::result::Result<Identity, String>,
}

impl StaticAuthGateway {
    /// Every login resolves with `identity`.
    pub fn succeeding(storage: SessionStorage, identity: Identity) -> Self {
        Self {
            storage,
            outcome: Ok(identity),
        }
    }

    /// Every login fails with `message`.
    pub fn failing(storage: SessionStorage, message: impl Into<String>) -> Self {
        Self {
            storage,
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl AuthGateway for StaticAuthGateway {
    fn current_session(&self) -> Result<Option<Identity>> {
        self.storage.load()
    }

    async fn interactive_login(&self) -> Result<Identity> {
        match &self.outcome {
            Ok(identity) => {
                self.storage.store(identity)?;
                Ok(identity.clone())
            }
            Err(message) => Err(FlowError::service(message.clone())),
        }
    }

    fn clear_session(&self) -> Result<()> {
        self.storage.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_succeeding_persists_identity() {
        let dir = TempDir::new().unwrap();
        let identity = Identity::new(json!({ "userId": "u-1" }));
        let gateway = StaticAuthGateway::succeeding(SessionStorage::new(dir.path()), identity.clone());

        assert_eq!(gateway.interactive_login().await.unwrap(), identity);
        assert_eq!(gateway.current_session().unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_failing_persists_nothing() {
        let dir = TempDir::new().unwrap();
        let gateway =
            StaticAuthGateway::failing(SessionStorage::new(dir.path()), "denied");

        assert!(gateway.interactive_login().await.unwrap_err().is_service());
        assert!(gateway.current_session().unwrap().is_none());
    }
}
