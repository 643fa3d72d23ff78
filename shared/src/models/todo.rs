//! EMI to-do item

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// An EMI installment the server reports as due.
///
/// Transient: recomputed on every dashboard load, never persisted
/// client-side. Due status is computed server-side and trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub member_name: String,
    pub aadhaar: String,
    pub due_date: DateTime<Utc>,
    pub amount: f64,
}

impl TodoItem {
    /// Due date in the viewer's local calendar.
    pub fn due_date_local(&self) -> String {
        self.due_date
            .with_timezone(&Local)
            .format("%d/%m/%Y")
            .to_string()
    }

    /// Amount with the currency marker.
    pub fn amount_display(&self) -> String {
        format!("₹{}", self.amount)
    }
}
