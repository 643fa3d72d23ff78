//! Ummid Client - role-gated client for the loan-tracking API
//!
//! Authenticates a user, persists the session durably, and composes the
//! role-dependent dashboard view-models from the REST API.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod http;
pub mod role;
pub mod session;

pub use auth::AuthController;
pub use config::ClientConfig;
pub use dashboard::{ManagerDashboard, ManagerView, Section, WorkerDashboard, WorkerView};
pub use error::{ClientError, ClientResult};
pub use gateway::ApiGateway;
pub use http::HttpClient;
pub use role::{route, DashboardKind, Role};
pub use session::{Identity, SessionError, SessionStore};
