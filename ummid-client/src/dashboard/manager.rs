//! Manager dashboard

use std::sync::Arc;

use shared::models::{RevenueReport, WorkerReport};

use super::{LoadGuard, Section};
use crate::gateway::ApiGateway;
use crate::session::SessionStore;
use crate::{ClientError, ClientResult};

/// View-model for the manager dashboard.
#[derive(Debug, Clone)]
pub struct ManagerView {
    /// Per-worker rows in server-supplied order.
    pub workers: Section<Vec<WorkerReport>>,
    pub revenue: Section<RevenueReport>,
}

/// Aggregator for the manager view.
pub struct ManagerDashboard {
    gateway: Arc<dyn ApiGateway>,
    store: Arc<SessionStore>,
}

impl ManagerDashboard {
    pub fn new(gateway: Arc<dyn ApiGateway>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// Load worker reports and revenue concurrently.
    ///
    /// An empty system is a valid state: a revenue response with no
    /// body normalizes to the explicit zero total, it is not an error.
    pub async fn load(&self) -> ClientResult<ManagerView> {
        let guard = LoadGuard::begin(&self.store)?;
        let token = guard.token();

        let (workers, revenue) = tokio::join!(
            self.gateway.worker_reports(token),
            self.gateway.revenue_report(token),
        );

        let unauthorized = matches!(&workers, Err(ClientError::Unauthorized))
            || matches!(&revenue, Err(ClientError::Unauthorized));
        guard.finish(unauthorized)?;

        // Missing report body -> {total: 0}
        let revenue = revenue.map(|report| report.unwrap_or_default());

        Ok(ManagerView {
            workers: Section::from_result("workers", workers),
            revenue: Section::from_result("revenue", revenue),
        })
    }
}
