//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::treemap::layout;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the store is populated and the treemap view can be laid
/// out with the configured options.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if !state.store.repos().is_empty() && check_treemap_health(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::new(
        &state.store.stats(),
        check_treemap_health(&state),
        state.uptime_seconds(),
    ))
}

fn check_treemap_health(state: &AppState) -> bool {
    layout(state.store.size_tree(), &state.layout).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health() {
        let state = Arc::new(AppState::builtin());
        let Json(health) = full_health(State(state)).await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.repos, 6);
        assert_eq!(health.tree_nodes, 18);
    }
}
