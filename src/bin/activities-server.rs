//! # Activities Server
//!
//! Process entry point for the Mergington activities service: initializes
//! logging, loads configuration, seeds the roster, and serves the web API
//! until a shutdown signal arrives.

use anyhow::Context;
use tracing::{error, info};

use mergington_activities::config::ActivitiesConfig;
use mergington_activities::web::{create_app, AppState};
use mergington_activities::{logging, Roster};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = ActivitiesConfig::load().context("failed to load configuration")?;
    let bind_address = config.server.bind_address.clone();

    let state = AppState::new(config);
    log_startup(&state.roster.read());

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to {bind_address}"))?;

    info!(%bind_address, "Activities server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Activities server stopped");
    Ok(())
}

fn log_startup(roster: &Roster) {
    info!(
        activities = roster.len(),
        enforce_capacity = roster.enforces_capacity(),
        "Roster seeded"
    );
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received, stopping server");
}
