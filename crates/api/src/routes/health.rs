//! Liveness and database readiness for the sales query service.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// `ok` while the sales database answers, `degraded` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Connections currently held by the pool, busy or idle.
    pub pool_connections: u32,
    pub pool_idle: usize,
}

impl HealthResponse {
    fn from_pool(pool: &nativequery_db::DbPool, db_healthy: bool) -> Self {
        let status = if db_healthy {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            pool_connections: pool.size(),
            pool_idle: pool.num_idle(),
        }
    }
}

/// GET /health
///
/// Always answers 200; a failed `SELECT 1` only flips the status.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match nativequery_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Sales database health check failed");
            false
        }
    };

    Json(HealthResponse::from_pool(&state.pool, db_healthy))
}

/// Mounted at the root, next to the `/sales` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
