//! Dashboard aggregation
//!
//! Each dashboard issues a fixed fan-out of reads against the gateway,
//! waits for all of them to settle, and merges the results into one
//! view-model. A failed read degrades only its own section; sibling
//! reads are unaffected.

mod manager;
mod worker;

pub use manager::{ManagerDashboard, ManagerView};
pub use worker::{WorkerDashboard, WorkerView};

use crate::session::{Identity, SessionStore};
use crate::{ClientError, ClientResult};

/// One dataset of a dashboard view-model.
///
/// `Unavailable` marks a read that failed this load. An empty `Loaded`
/// list is a valid "no data" state, never an error.
#[derive(Debug, Clone)]
pub enum Section<T> {
    Loaded(T),
    Unavailable,
}

impl<T> Section<T> {
    /// Wrap a read result, logging the failure that degraded a section.
    pub fn from_result(name: &str, result: ClientResult<T>) -> Self {
        match result {
            Ok(data) => Section::Loaded(data),
            Err(e) => {
                tracing::warn!(section = %name, error = %e, "Section degraded");
                Section::Unavailable
            }
        }
    }

    /// The loaded data, if the read succeeded.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(data) => Some(data),
            Section::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Section::Unavailable)
    }
}

impl<T> Section<Vec<T>> {
    /// Rows to render; an unavailable section renders no rows.
    pub fn rows(&self) -> &[T] {
        match self {
            Section::Loaded(rows) => rows,
            Section::Unavailable => &[],
        }
    }

    /// Row count for section headers.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Identity captured when a load starts.
///
/// `finish` re-reads the store after the join: a load whose session is
/// no longer current is discarded, and a token the server rejected
/// closes the session.
pub(crate) struct LoadGuard<'a> {
    store: &'a SessionStore,
    identity: Identity,
}

impl<'a> LoadGuard<'a> {
    /// Capture the current identity, or refuse to load unauthenticated.
    pub(crate) fn begin(store: &'a SessionStore) -> ClientResult<Self> {
        let identity = store.get().ok_or(ClientError::Unauthorized)?;
        Ok(Self { store, identity })
    }

    pub(crate) fn token(&self) -> &str {
        &self.identity.token
    }

    /// Validate the settled load against the store.
    ///
    /// `unauthorized` reports whether any read saw a 401; that clears
    /// the session so the embedder must re-authenticate.
    pub(crate) fn finish(self, unauthorized: bool) -> ClientResult<()> {
        match self.store.get() {
            Some(current) if current.token == self.identity.token => {}
            _ => {
                tracing::debug!("Discarding load: session changed mid-flight");
                return Err(ClientError::SessionChanged);
            }
        }

        if unauthorized {
            tracing::warn!("Token rejected by the server, closing session");
            self.store.clear()?;
            return Err(ClientError::Unauthorized);
        }

        Ok(())
    }
}
