//! # Health Check Handler
//!
//! Minimal liveness endpoint for monitoring. The service has no external
//! dependencies, so a single check suffices.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::web::state::AppState;

/// Basic health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: i64,
    pub activities: usize,
}

/// Basic health check endpoint: GET /health
///
/// Returns OK if the service is running, along with uptime and the number of
/// activities in the roster.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let activities = state.roster.read().len();

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        activities,
    })
}
