//! Reporting Models

use serde::{Deserialize, Serialize};

/// Per-worker aggregate from the reporting endpoint.
///
/// Rows are rendered in server-supplied order; ordering among workers is
/// the server's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerReport {
    pub worker_id: String,
    pub name: String,
    pub groups_count: u64,
    pub members_count: u64,
    pub loans_given: u64,
}

/// Total collected revenue.
///
/// `Default` is the explicit `{total: 0}` an empty reporting endpoint
/// normalizes to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueReport {
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_default_is_zero() {
        assert_eq!(RevenueReport::default().total, 0.0);
    }
}
