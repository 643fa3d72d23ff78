//! Group Model

use serde::{Deserialize, Serialize};

/// Lending group entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub leader_name: String,
}

/// Create group payload
///
/// Fields are submitted exactly as the user typed them; the server
/// assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreate {
    pub name: String,
    pub leader_name: String,
}
