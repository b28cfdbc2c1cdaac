//! Authenticated-principal domain model.

use serde::{Deserialize, Serialize};

/// Opaque identity payload returned by the authentication gateway.
///
/// This layer never parses the payload; it is stored, persisted and tested
/// for presence only. "Authenticated" is defined as the payload being
/// non-null and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(serde_json::Value);

impl Identity {
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Returns true when the payload actually identifies a principal.
    ///
    /// Null, an empty string and an empty object all count as absent; any
    /// other value is treated as a present identity.
    pub fn is_present(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }

    /// Raw payload, for display purposes only; the contents stay opaque to
    /// this layer.
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Lifecycle of an authentication attempt.
///
/// `Idle -> Loading -> {Succeeded, Failed}` on login and session restore;
/// logout returns the store to `Idle` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_identity_is_absent() {
        assert!(!Identity::new(json!(null)).is_present());
    }

    #[test]
    fn test_empty_string_and_object_are_absent() {
        assert!(!Identity::new(json!("")).is_present());
        assert!(!Identity::new(json!({})).is_present());
    }

    #[test]
    fn test_populated_payloads_are_present() {
        assert!(Identity::new(json!("user-1")).is_present());
        assert!(Identity::new(json!({ "emailAddress": "a@b.c" })).is_present());
        assert!(Identity::new(json!(42)).is_present());
    }

    #[test]
    fn test_identity_roundtrips_untouched() {
        let payload = json!({ "userId": "u-1", "profile": { "name": "Ada" } });
        let identity = Identity::new(payload.clone());
        assert_eq!(identity.payload(), &payload);
        let encoded = serde_json::to_value(&identity).unwrap();
        assert_eq!(encoded, payload);
    }
}
