//! Member Model

use serde::{Deserialize, Serialize};

/// Group member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// National id string
    pub aadhaar: String,
}
