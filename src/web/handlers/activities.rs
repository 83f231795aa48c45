//! # Activity Roster Handlers
//!
//! HTTP handlers for listing activities and registering/unregistering
//! participants. Thin translation layer: parameters are typed and validated
//! here, then handed to the core roster operations.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::roster::Activity;
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Confirmation message returned by signup and unregister.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters shared by signup and unregister.
#[derive(Debug, Deserialize)]
pub struct ParticipantParams {
    pub email: String,
}

/// List all activities: GET /activities
///
/// Returns the full mapping from activity name to description, schedule,
/// capacity, and current participants.
pub async fn list_activities(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    debug!("Listing activities");
    let roster = state.roster.read();
    Json(roster.activities().clone())
}

/// Register a participant: POST /activities/{activity_name}/signup?email=...
///
/// Fails with 404 for an unknown activity, 400 for a duplicate sign-up or a
/// full activity (when capacity enforcement is enabled).
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<ParticipantParams>,
) -> ApiResult<Json<MessageResponse>> {
    let email = validate_email(&params.email)?;

    let mut roster = state.roster.write();
    roster.register(&activity_name, email).inspect_err(|error| {
        warn!(activity = %activity_name, email, %error, "Signup rejected");
    })?;

    info!(activity = %activity_name, email, "Participant signed up");
    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}

/// Remove a participant: DELETE /activities/{activity_name}/unregister?email=...
///
/// Fails with 404 for an unknown activity, 400 when the email is not
/// currently registered.
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<ParticipantParams>,
) -> ApiResult<Json<MessageResponse>> {
    let email = validate_email(&params.email)?;

    let mut roster = state.roster.write();
    roster
        .unregister(&activity_name, email)
        .inspect_err(|error| {
            warn!(activity = %activity_name, email, %error, "Unregister rejected");
        })?;

    info!(activity = %activity_name, email, "Participant unregistered");
    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}

/// Boundary validation: the email must be non-empty. Format is deliberately
/// not validated.
fn validate_email(email: &str) -> ApiResult<&str> {
    if email.trim().is_empty() {
        return Err(ApiError::bad_request("Email cannot be empty"));
    }
    Ok(email)
}
