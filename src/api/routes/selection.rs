//! Selection Routes
//!
//! - GET /api/v1/selection - Current view and selected record
//! - POST /api/v1/selection/view - Switch view
//! - POST /api/v1/selection/record - Select record (unknown ids report `changed: false`)

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SelectRecordRequest, SelectViewRequest, SelectionResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/selection
pub async fn get_selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    Json(SelectionResponse::snapshot(&state.selection().await))
}

/// POST /api/v1/selection/view
pub async fn select_view(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectViewRequest>,
) -> ApiResult<Json<SelectionResponse>> {
    let view = request.parse().map_err(|e| ApiError::Validation(e.to_string()))?;

    let (changed, after) = state.select_view(view).await;
    Ok(Json(SelectionResponse::transition(&after, changed)))
}

/// POST /api/v1/selection/record
pub async fn select_record(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRecordRequest>,
) -> Json<SelectionResponse> {
    let (changed, after) = state.select_record(&request.id).await;
    Json(SelectionResponse::transition(&after, changed))
}
