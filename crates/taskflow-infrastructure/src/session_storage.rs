//! Locally persisted session blob.
//!
//! A single JSON file under a fixed name holds the opaque identity payload
//! between page reloads. Only the auth gateway reads or writes it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use taskflow_core::auth::Identity;
use taskflow_core::error::Result;

/// Fixed file name for the persisted session.
pub const SESSION_FILE: &str = "taskflow-session.json";

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Creates a store rooted at `dir`; the blob lives at
    /// `dir/taskflow-session.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted identity, if any. A missing file is `Ok(None)`;
    /// an unreadable or corrupt file is an error the caller may degrade to
    /// "no session".
    pub fn load(&self) -> Result<Option<Identity>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let identity: Identity = serde_json::from_slice(&bytes)?;
        Ok(Some(identity))
    }

    /// Persists the identity, replacing any previous blob.
    pub fn store(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(identity)?)?;
        Ok(())
    }

    /// Removes the blob. Idempotent: clearing an absent session succeeds.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
