//! Loan Model

use serde::{Deserialize, Serialize};

/// Loan status reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Closed,
    #[serde(other)]
    Unknown,
}

/// Member summary embedded in a loan when the server resolved the
/// reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummary {
    pub name: String,
}

/// Weak member reference on a loan.
///
/// The server resolves it best-effort: an embedded summary document on
/// success, a bare id string otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberRef {
    Resolved(MemberSummary),
    Id(String),
}

/// Loan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub member_id: Option<MemberRef>,
    pub principal: f64,
    pub emi_amount: f64,
    pub emi_count: u32,
    pub status: LoanStatus,
}

impl Loan {
    /// Display name of the borrowing member, or a placeholder when the
    /// reference did not resolve server-side.
    pub fn member_name(&self) -> &str {
        match &self.member_id {
            Some(MemberRef::Resolved(member)) => &member.name,
            _ => "Member",
        }
    }
}
