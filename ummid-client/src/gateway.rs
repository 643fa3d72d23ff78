//! API gateway seam
//!
//! `ApiGateway` is the capability the auth controller and the dashboard
//! aggregators depend on. `HttpClient` is the production implementation;
//! tests substitute in-memory stubs.

use async_trait::async_trait;
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{Group, GroupCreate, Loan, Member, RevenueReport, TodoItem, WorkerReport};

use crate::{ClientResult, HttpClient};

/// Gateway to the loan-tracking REST API
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Exchange credentials for a token, role and display name
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse>;

    /// List lending groups
    async fn groups(&self, token: &str) -> ClientResult<Vec<Group>>;

    /// List members
    async fn members(&self, token: &str) -> ClientResult<Vec<Member>>;

    /// List loans, member references embedded best-effort
    async fn loans(&self, token: &str) -> ClientResult<Vec<Loan>>;

    /// List EMIs currently due
    async fn todo(&self, token: &str) -> ClientResult<Vec<TodoItem>>;

    /// Create a lending group; the server assigns the id
    async fn create_group(&self, token: &str, group: &GroupCreate) -> ClientResult<Group>;

    /// Per-worker aggregates for the manager view
    async fn worker_reports(&self, token: &str) -> ClientResult<Vec<WorkerReport>>;

    /// Collected revenue; `None` when the endpoint has no data
    async fn revenue_report(&self, token: &str) -> ClientResult<Option<RevenueReport>>;
}

#[async_trait]
impl ApiGateway for HttpClient {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        self.post("/api/auth/login", &request, None).await
    }

    async fn groups(&self, token: &str) -> ClientResult<Vec<Group>> {
        self.get("/api/groups", Some(token)).await
    }

    async fn members(&self, token: &str) -> ClientResult<Vec<Member>> {
        self.get("/api/members", Some(token)).await
    }

    async fn loans(&self, token: &str) -> ClientResult<Vec<Loan>> {
        self.get("/api/loans", Some(token)).await
    }

    async fn todo(&self, token: &str) -> ClientResult<Vec<TodoItem>> {
        self.get("/api/todo", Some(token)).await
    }

    async fn create_group(&self, token: &str, group: &GroupCreate) -> ClientResult<Group> {
        self.post("/api/groups", group, Some(token)).await
    }

    async fn worker_reports(&self, token: &str) -> ClientResult<Vec<WorkerReport>> {
        self.get("/api/reports/workers", Some(token)).await
    }

    async fn revenue_report(&self, token: &str) -> ClientResult<Option<RevenueReport>> {
        self.get_optional("/api/reports/revenue", Some(token)).await
    }
}
