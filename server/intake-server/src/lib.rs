//! Incident intake server
//!
//! HTTP service in front of the intake engine: submissions, admin login,
//! status changes and the aggregated dashboard. All state is in-memory.

pub mod config;
mod error;
mod handlers;
pub mod seed;
mod state;
mod types;

pub use error::{ApiError, ServerError};
pub use handlers::{complete, dashboard, health, login, submit, update_status};
pub use state::AppState;

use axum::{
  http::{header, Method},
  routing::{get, post},
  Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE]);

  Router::new()
    .route("/health", get(health))
    .route("/api/submit", post(submit))
    .route("/api/admin/login", post(login))
    .route("/api/dashboard", get(dashboard))
    .route("/api/complete", post(complete))
    .route("/api/update-status", post(update_status))
    .layer(TraceLayer::new_for_http())
    .layer(cors)
    .with_state(state)
}
