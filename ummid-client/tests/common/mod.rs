//! In-memory stub of the loan-tracking API for integration tests.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use shared::client::LoginResponse;
use shared::models::{Group, GroupCreate, Loan, Member, RevenueReport, TodoItem, WorkerReport};
use ummid_client::{ApiGateway, ClientError, ClientResult, Identity, SessionStore};

/// Canned accounts: one manager, field workers, and one role this
/// client cannot route.
const ACCOUNTS: &[(&str, &str, &str, &str)] = &[
    ("rinku", "123123", "manager", "Rinku"),
    ("purnima", "worker123", "worker", "Purnima"),
    ("seema", "worker123", "worker", "Seema"),
    ("admin1", "admin123", "admin", "Admin"),
];

/// Session interference applied while a read is in flight, simulating
/// the user logging out or switching accounts before the load settles.
pub enum SessionDisruption {
    Logout(SessionStore),
    Relogin(SessionStore, Identity),
}

#[derive(Default)]
pub struct StubGateway {
    pub groups: Mutex<Vec<Group>>,
    pub members: Mutex<Vec<Member>>,
    pub loans: Mutex<Vec<Loan>>,
    pub todo: Mutex<Vec<TodoItem>>,
    pub worker_reports: Mutex<Vec<WorkerReport>>,
    pub revenue: Mutex<Option<RevenueReport>>,
    /// Answer the groups read with an internal error.
    pub fail_groups: AtomicBool,
    /// Answer every authenticated call with 401.
    pub reject_token: AtomicBool,
    pub disruption: Mutex<Option<SessionDisruption>>,
    next_id: AtomicU64,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub with one row in every dataset.
    pub fn with_fixtures() -> Self {
        let stub = Self::new();

        stub.groups.lock().unwrap().push(Group {
            id: "g1".to_string(),
            name: "Asha".to_string(),
            leader_name: "Kuhely".to_string(),
        });
        stub.members.lock().unwrap().push(Member {
            id: "m1".to_string(),
            name: "Devi".to_string(),
            aadhaar: "111122223333".to_string(),
        });
        stub.loans.lock().unwrap().push(
            serde_json::from_str(
                r#"{
                    "_id": "l1",
                    "memberId": { "name": "Devi" },
                    "principal": 5000.0,
                    "emiAmount": 500.0,
                    "emiCount": 10,
                    "status": "active"
                }"#,
            )
            .unwrap(),
        );
        stub.todo.lock().unwrap().push(TodoItem {
            member_name: "Devi".to_string(),
            aadhaar: "111122223333".to_string(),
            due_date: "2024-03-01T00:00:00Z".parse().unwrap(),
            amount: 500.0,
        });
        stub.worker_reports.lock().unwrap().extend([
            WorkerReport {
                worker_id: "w2".to_string(),
                name: "Seema".to_string(),
                groups_count: 3,
                members_count: 12,
                loans_given: 7,
            },
            WorkerReport {
                worker_id: "w1".to_string(),
                name: "Purnima".to_string(),
                groups_count: 1,
                members_count: 4,
                loans_given: 2,
            },
        ]);
        *stub.revenue.lock().unwrap() = Some(RevenueReport { total: 12500.0 });

        stub
    }

    fn check_token(&self, token: &str) -> ClientResult<()> {
        if let Some(disruption) = self.disruption.lock().unwrap().take() {
            match disruption {
                SessionDisruption::Logout(store) => store.clear().unwrap(),
                SessionDisruption::Relogin(store, identity) => store.put(&identity).unwrap(),
            }
        }

        if self.reject_token.load(Ordering::SeqCst) || !token.starts_with("token-") {
            return Err(ClientError::Unauthorized);
        }
        Ok(())
    }
}

#[async_trait]
impl ApiGateway for StubGateway {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        for (user, pass, role, name) in ACCOUNTS {
            if *user == username && *pass == password {
                return Ok(LoginResponse {
                    token: format!("token-{}", username),
                    role: role.to_string(),
                    name: name.to_string(),
                });
            }
        }
        Err(ClientError::Unauthorized)
    }

    async fn groups(&self, token: &str) -> ClientResult<Vec<Group>> {
        self.check_token(token)?;
        if self.fail_groups.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("groups backend down".to_string()));
        }
        Ok(self.groups.lock().unwrap().clone())
    }

    async fn members(&self, token: &str) -> ClientResult<Vec<Member>> {
        self.check_token(token)?;
        Ok(self.members.lock().unwrap().clone())
    }

    async fn loans(&self, token: &str) -> ClientResult<Vec<Loan>> {
        self.check_token(token)?;
        Ok(self.loans.lock().unwrap().clone())
    }

    async fn todo(&self, token: &str) -> ClientResult<Vec<TodoItem>> {
        self.check_token(token)?;
        Ok(self.todo.lock().unwrap().clone())
    }

    async fn create_group(&self, token: &str, group: &GroupCreate) -> ClientResult<Group> {
        self.check_token(token)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Group {
            id: format!("g-new-{}", id),
            name: group.name.clone(),
            leader_name: group.leader_name.clone(),
        };
        self.groups.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn worker_reports(&self, token: &str) -> ClientResult<Vec<WorkerReport>> {
        self.check_token(token)?;
        Ok(self.worker_reports.lock().unwrap().clone())
    }

    async fn revenue_report(&self, token: &str) -> ClientResult<Option<RevenueReport>> {
        self.check_token(token)?;
        Ok(self.revenue.lock().unwrap().clone())
    }
}
