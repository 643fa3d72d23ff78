//! Role routing
//!
//! The sole branching point of the client: an authenticated identity's
//! role selects exactly one dashboard. Unrecognized roles fail closed
//! and require re-authentication.

use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

/// User role as reported by the server.
///
/// The wire form is a plain string; `Unknown` carries any value this
/// client has no dashboard for, verbatim, so it can be logged and
/// persisted without being routable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Worker,
    Manager,
    Unknown(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "worker" => Role::Worker,
            "manager" => Role::Manager,
            _ => Role::Unknown(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Worker => "worker".to_string(),
            Role::Manager => "manager".to_string(),
            Role::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Worker => write!(f, "worker"),
            Role::Manager => write!(f, "manager"),
            Role::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// Dashboard variant a role routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Worker,
    Manager,
}

/// Map a role to its dashboard.
///
/// Total over the role type, no default arm: an unknown role renders
/// neither dashboard.
pub fn route(role: &Role) -> ClientResult<DashboardKind> {
    match role {
        Role::Worker => Ok(DashboardKind::Worker),
        Role::Manager => Ok(DashboardKind::Manager),
        Role::Unknown(raw) => {
            tracing::warn!(role = %raw, "Refusing to route unrecognized role");
            Err(ClientError::UnrecognizedRole(raw.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_route_to_their_dashboard() {
        assert_eq!(route(&Role::Worker).unwrap(), DashboardKind::Worker);
        assert_eq!(route(&Role::Manager).unwrap(), DashboardKind::Manager);
    }

    #[test]
    fn unknown_role_fails_closed() {
        let err = route(&Role::Unknown("admin".to_string())).unwrap_err();
        assert!(matches!(err, ClientError::UnrecognizedRole(raw) if raw == "admin"));
    }

    #[test]
    fn role_round_trips_through_string() {
        assert_eq!(Role::from("manager".to_string()), Role::Manager);
        assert_eq!(String::from(Role::Worker), "worker");
        assert_eq!(
            String::from(Role::Unknown("auditor".to_string())),
            "auditor"
        );
    }
}
