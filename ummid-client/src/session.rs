//! Durable session store
//!
//! Holds the authenticated identity as a single JSON document on disk so
//! a restarted process reconstructs the session without logging in
//! again.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::role::Role;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The authenticated user's token, role and display name.
///
/// Created on successful login, destroyed on logout, replaced wholesale
/// on re-login; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub token: String,
    pub role: Role,
    pub name: String,
}

/// Durable store for the current identity.
///
/// The single source of truth for whether a user is authenticated. The
/// record is written as one document: a reader sees all three fields or
/// none.
#[derive(Debug, Clone)]
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir`; the record lives in
    /// `dir/session.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            file_path: dir.as_ref().join("session.json"),
        }
    }

    /// Persist the identity, replacing any previous record.
    pub fn put(&self, identity: &Identity) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(identity)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(name = %identity.name, "Session saved");
        Ok(())
    }

    /// Reconstruct the identity, or report absent.
    ///
    /// A missing or unreadable record is absent; a partial identity is
    /// never returned.
    pub fn get(&self) -> Option<Identity> {
        if !self.file_path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&self.file_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::debug!("Unreadable session record: {}", e);
                None
            }
        }
    }

    /// Remove the record. Safe to call when already absent.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session cleared");
        }
        Ok(())
    }
}
