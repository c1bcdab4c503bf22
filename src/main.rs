//! Demo binary for the Equity Vesting Engine.
//!
//! Loads the employee roster, runs a vesting batch as of today, logs a
//! per-employee summary, then serves the HTTP API.

use std::env;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vesting_engine::api::{AppState, create_router};
use vesting_engine::roster::RosterLoader;
use vesting_engine::service::VestingService;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "Vesting engine failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let roster_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "./config/roster.yaml".to_string());

    let loader = RosterLoader::load(&roster_path)?;
    info!(
        roster = %roster_path,
        employees = loader.employees().len(),
        "Roster loaded"
    );

    let service = VestingService::new();
    let as_of_date = Utc::now().date_naive();
    service.process_batch(loader.employees(), as_of_date).await?;

    for employee in loader.employees() {
        let outcome = service.get_result(&employee.id)?;
        let vested_percent =
            outcome.vested_units as f64 / employee.total_units as f64 * 100.0;
        info!(
            employee = %employee.name,
            total_units = employee.total_units,
            vested_units = outcome.vested_units,
            unvested_units = outcome.unvested_units,
            vested_percent = (vested_percent * 10.0).round() / 10.0,
            next_vest_date = ?outcome.next_vest_date,
            "Vesting summary"
        );
    }

    let state = AppState::new(service);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!(addr = %listener.local_addr()?, "Serving vesting API");
    axum::serve(listener, router).await?;

    Ok(())
}
