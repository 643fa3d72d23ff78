//! Entity models for the loan-tracking API
//!
//! One module per entity, mirroring the server's collections. Field
//! names follow the wire format: camelCase keys, `_id` identifiers.

pub mod group;
pub mod loan;
pub mod member;
pub mod report;
pub mod todo;

pub use group::{Group, GroupCreate};
pub use loan::{Loan, LoanStatus, MemberRef, MemberSummary};
pub use member::Member;
pub use report::{RevenueReport, WorkerReport};
pub use todo::TodoItem;
