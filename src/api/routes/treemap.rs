//! Treemap Routes
//!
//! - GET /api/v1/treemap?width=&height= - Layout of the fixture tree
//! - POST /api/v1/treemap/layout - Layout of a caller-supplied tree

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LayoutRequest, TreemapQuery};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::treemap::{layout, TreemapLayout};

/// GET /api/v1/treemap
pub async fn fixture_layout(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TreemapQuery>,
) -> ApiResult<Json<TreemapLayout>> {
    let mut options = state.layout;
    if let Some(width) = query.width {
        options.width = width;
    }
    if let Some(height) = query.height {
        options.height = height;
    }

    Ok(Json(layout(state.store.size_tree(), &options)?))
}

/// POST /api/v1/treemap/layout
pub async fn custom_layout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LayoutRequest>,
) -> ApiResult<Json<TreemapLayout>> {
    let options = request.options(state.layout);
    let result = layout(&request.tree, &options)?;

    tracing::debug!(nodes = result.len(), "Laid out caller-supplied tree");
    Ok(Json(result))
}
