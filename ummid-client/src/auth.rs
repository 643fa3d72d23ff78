//! Login and logout
//!
//! The auth controller owns the writes to the session store: login
//! commits the identity write-through, logout clears it.

use std::sync::Arc;

use crate::gateway::ApiGateway;
use crate::role::Role;
use crate::session::{Identity, SessionError, SessionStore};
use crate::{ClientError, ClientResult};

/// Controller for the login and logout transitions.
pub struct AuthController {
    gateway: Arc<dyn ApiGateway>,
    store: Arc<SessionStore>,
}

impl AuthController {
    pub fn new(gateway: Arc<dyn ApiGateway>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// Submit credentials exactly as typed; the server is the
    /// validation authority.
    ///
    /// On success the `{token, role, name}` triple is committed to the
    /// session store before the identity is exposed. Every failure maps
    /// to the same generic `LoginFailed`; the cause goes to the log,
    /// never to the caller. No automatic retry.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Identity> {
        match self.gateway.login(username, password).await {
            Ok(response) => {
                let identity = Identity {
                    token: response.token,
                    role: Role::from(response.role),
                    name: response.name,
                };
                self.store.put(&identity)?;
                tracing::info!(username = %username, role = %identity.role, "Logged in");
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login rejected");
                Err(ClientError::LoginFailed)
            }
        }
    }

    /// The identity the store currently holds, if any.
    pub fn current(&self) -> Option<Identity> {
        self.store.get()
    }

    /// Clear the session unconditionally.
    ///
    /// Idempotent, no server call; the next operation starts
    /// unauthenticated.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}
