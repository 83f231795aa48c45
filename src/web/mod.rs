//! # Web API Module
//!
//! REST endpoints for the activity roster plus the static single-page UI.
//! The web layer is a thin transport shell: it types and validates request
//! parameters, calls the core roster operations, and renders core error
//! kinds into HTTP statuses.

use std::time::Duration;

use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod state;

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Create the web application with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let common_middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_millis(
            state.config.server.request_timeout_ms,
        )))
        .layer(cors);

    let static_dir = state.config.server.static_dir.clone();

    let app = Router::new()
        .merge(activity_routes())
        .merge(health_routes())
        .merge(ui_routes(&static_dir))
        .layer(common_middleware)
        .with_state(state);

    info!("Web application created with all routes and middleware");
    app
}

/// Activity roster routes: list, signup, unregister.
pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(handlers::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::activities::unregister),
        )
}

/// Health check routes for monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Static UI routes: the root redirects into the single-page app.
fn ui_routes(static_dir: &str) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::permanent("/static/index.html") }),
        )
        .nest_service("/static", ServeDir::new(static_dir))
}
