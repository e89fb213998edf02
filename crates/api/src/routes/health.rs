//! Route definitions for the health check endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount the health check route (intended for the application root).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
