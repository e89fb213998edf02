//! Handler for the health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vvv_core::envelope::Envelope;
use vvv_core::instrument::instrument;

use crate::error::AppResult;
use crate::response;
use crate::state::AppState;

/// Health check payload carried inside the response envelope.
#[derive(Debug, Serialize)]
pub struct HealthPayload {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- service and database health.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<Envelope<HealthPayload>>> {
    instrument("health", async move {
        let db_healthy = vvv_db::health_check(&state.pool).await.is_ok();
        let status = if db_healthy { "ok" } else { "degraded" };

        Ok(response::ok_with_message(
            HealthPayload {
                status,
                version: env!("CARGO_PKG_VERSION"),
                db_healthy,
            },
            "healthy",
        ))
    })
    .await
}
