//! Authentication backend for a sports web portal.
//!
//! Registers users, verifies credentials at login, and validates stateless
//! bearer tokens (JWT) to resolve the current user. Users live in PostgreSQL.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (auth + health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me));

    axum::Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /health — liveness probe.
async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "sportal" })),
    )
}
