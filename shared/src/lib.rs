//! Shared types for the Ummid loan-tracking service
//!
//! Wire DTOs exchanged with the loan-tracking REST API: auth
//! request/response types and the entity models the dashboards render.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse};
pub use models::{
    Group, GroupCreate, Loan, LoanStatus, Member, MemberRef, RevenueReport, TodoItem, WorkerReport,
};
