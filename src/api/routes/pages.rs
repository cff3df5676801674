//! Page Routes
//!
//! Server-rendered dashboard and the two form-driven transitions.
//!
//! - GET / - Full HTML page of the active view
//! - POST /select/view - Switch view (form field `view`), redirects to /
//! - POST /select/record - Select record (form field `id`), redirects to /

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::api::dto::{SelectRecordRequest, SelectViewRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::render::{render_page, Navigation, PageOptions};

/// GET /
pub async fn dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let selection = state.selection().await;
    let options = PageOptions::new(state.layout, Navigation::Server);

    let html = render_page(&state.store, &selection, &options)
        .map_err(|e| ApiError::Internal(format!("Failed to render dashboard: {}", e)))?;

    Ok(Html(html))
}

/// POST /select/view
pub async fn select_view(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SelectViewRequest>,
) -> ApiResult<Redirect> {
    let view = form.parse().map_err(|e| ApiError::Validation(e.to_string()))?;
    state.select_view(view).await;
    Ok(Redirect::to("/"))
}

/// POST /select/record
///
/// Unknown ids are ignored; the page is shown unchanged.
pub async fn select_record(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SelectRecordRequest>,
) -> Redirect {
    state.select_record(&form.id).await;
    Redirect::to("/")
}
