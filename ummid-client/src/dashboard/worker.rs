//! Field-worker dashboard

use std::sync::Arc;

use shared::models::{Group, GroupCreate, Loan, Member, TodoItem};

use super::{LoadGuard, Section};
use crate::gateway::ApiGateway;
use crate::session::SessionStore;
use crate::{ClientError, ClientResult};

/// View-model for the field-worker dashboard.
#[derive(Debug, Clone)]
pub struct WorkerView {
    pub groups: Section<Vec<Group>>,
    pub members: Section<Vec<Member>>,
    pub loans: Section<Vec<Loan>>,
    /// EMIs due, as computed server-side.
    pub todo: Section<Vec<TodoItem>>,
}

/// Aggregator for the field-worker view.
pub struct WorkerDashboard {
    gateway: Arc<dyn ApiGateway>,
    store: Arc<SessionStore>,
}

impl WorkerDashboard {
    pub fn new(gateway: Arc<dyn ApiGateway>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// Load the four dashboard datasets concurrently.
    ///
    /// The view-model is produced only after every read settles; a read
    /// that fails degrades its own section while the others still
    /// render.
    pub async fn load(&self) -> ClientResult<WorkerView> {
        let guard = LoadGuard::begin(&self.store)?;
        let token = guard.token();

        let (groups, members, loans, todo) = tokio::join!(
            self.gateway.groups(token),
            self.gateway.members(token),
            self.gateway.loans(token),
            self.gateway.todo(token),
        );

        let unauthorized = matches!(&groups, Err(ClientError::Unauthorized))
            || matches!(&members, Err(ClientError::Unauthorized))
            || matches!(&loans, Err(ClientError::Unauthorized))
            || matches!(&todo, Err(ClientError::Unauthorized));
        guard.finish(unauthorized)?;

        Ok(WorkerView {
            groups: Section::from_result("groups", groups),
            members: Section::from_result("members", members),
            loans: Section::from_result("loans", loans),
            todo: Section::from_result("todo", todo),
        })
    }

    /// Create a lending group.
    ///
    /// Name and leader are submitted exactly as typed; the server
    /// assigns the id. Callers reload afterwards for authoritative
    /// state instead of inserting the returned group locally, and keep
    /// their form state when creation fails.
    pub async fn create_group(&self, name: &str, leader_name: &str) -> ClientResult<Group> {
        let identity = self.store.get().ok_or(ClientError::Unauthorized)?;
        let payload = GroupCreate {
            name: name.to_string(),
            leader_name: leader_name.to_string(),
        };

        match self.gateway.create_group(&identity.token, &payload).await {
            Ok(group) => {
                tracing::info!(group = %group.name, id = %group.id, "Group created");
                Ok(group)
            }
            Err(ClientError::Unauthorized) => {
                tracing::warn!("Token rejected by the server, closing session");
                self.store.clear()?;
                Err(ClientError::Unauthorized)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Group creation failed");
                Err(e)
            }
        }
    }
}
