//! Auth types shared between server and client
//!
//! Request/response DTOs for the login endpoint. The role travels as a
//! plain string on the wire; the client converts it to a typed role.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub name: String,
}
