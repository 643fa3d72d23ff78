// ummid-client/examples/loan_dashboard.rs
// End-to-end demo against a running loan-tracking server.

use std::sync::Arc;

use ummid_client::{
    route, AuthController, ClientConfig, DashboardKind, ManagerDashboard, SessionStore,
    WorkerDashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password>", args[0]);
        println!("  Server: UMMID_API_URL (default http://localhost:5000)");
        return Ok(());
    }

    let config = ClientConfig::from_env();
    let gateway = Arc::new(config.build_http_client());

    let session_dir =
        std::env::var("UMMID_SESSION_DIR").unwrap_or_else(|_| ".ummid".to_string());
    let store = Arc::new(SessionStore::new(&session_dir));

    let auth = AuthController::new(gateway.clone(), store.clone());

    // Reuse a persisted session when one survives from a previous run.
    let identity = match auth.current() {
        Some(identity) => identity,
        None => auth.login(&args[1], &args[2]).await?,
    };
    println!("Welcome, {} ({})", identity.name, identity.role);

    match route(&identity.role) {
        Ok(DashboardKind::Worker) => {
            let dashboard = WorkerDashboard::new(gateway.clone(), store.clone());
            let view = dashboard.load().await?;

            println!("To-do (EMIs due)");
            if view.todo.is_unavailable() {
                println!("  (unavailable)");
            } else if view.todo.is_empty() {
                println!("  No pending EMIs");
            }
            for item in view.todo.rows() {
                println!(
                    "  {} ({}) due {}: {}",
                    item.member_name,
                    item.aadhaar,
                    item.due_date_local(),
                    item.amount_display()
                );
            }

            println!("Groups ({})", view.groups.len());
            for group in view.groups.rows() {
                println!("  {} (leader: {})", group.name, group.leader_name);
            }

            println!("Members ({})", view.members.len());
            for member in view.members.rows() {
                println!("  {} ({})", member.name, member.aadhaar);
            }

            println!("Loans ({})", view.loans.len());
            for loan in view.loans.rows() {
                println!(
                    "  {}: ₹{} ({:?}), EMI ₹{} x {}",
                    loan.member_name(),
                    loan.principal,
                    loan.status,
                    loan.emi_amount,
                    loan.emi_count
                );
            }
        }
        Ok(DashboardKind::Manager) => {
            let dashboard = ManagerDashboard::new(gateway.clone(), store.clone());
            let view = dashboard.load().await?;

            match view.revenue.loaded() {
                Some(revenue) => println!("Total collected: ₹{}", revenue.total),
                None => println!("Revenue: (unavailable)"),
            }

            println!("Workers overview");
            for report in view.workers.rows() {
                println!(
                    "  {}: groups {}, members {}, loans {}",
                    report.name, report.groups_count, report.members_count, report.loans_given
                );
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            auth.logout()?;
        }
    }

    Ok(())
}
