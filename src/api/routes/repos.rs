//! Repository Routes
//!
//! - GET /api/v1/repos - All records in rank order
//! - GET /api/v1/repos/:id - One record
//! - GET /api/v1/deep-dive - The featured deep-dive record

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::RepoListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::{DeepDiveRecord, RepoRecord};

/// GET /api/v1/repos
pub async fn list_repos(State(state): State<Arc<AppState>>) -> Json<RepoListResponse> {
    let repos = state.store.repos().to_vec();
    let stats = state.store.stats();

    Json(RepoListResponse {
        total: repos.len(),
        new_count: stats.new_count,
        repos,
    })
}

/// GET /api/v1/repos/:id
pub async fn get_repo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<RepoRecord>> {
    state
        .store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Repository '{}' not found", id)))
}

/// GET /api/v1/deep-dive
pub async fn get_deep_dive(State(state): State<Arc<AppState>>) -> Json<DeepDiveRecord> {
    Json(state.store.deep_dive().clone())
}
