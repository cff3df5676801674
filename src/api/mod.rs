//! Synapse HTTP Host
//!
//! Serves the dashboard as server-rendered HTML and exposes the same data
//! and transitions as JSON, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Active view as a full HTML page
//! - `POST /select/view` - Switch view (form), redirects to `/`
//! - `POST /select/record` - Select record (form), redirects to `/`
//!
//! ## Repositories
//! - `GET /api/v1/repos` - All records in rank order
//! - `GET /api/v1/repos/:id` - One record
//! - `GET /api/v1/deep-dive` - Featured deep-dive record
//!
//! ## Treemap
//! - `GET /api/v1/treemap` - Layout of the fixture tree
//! - `POST /api/v1/treemap/layout` - Layout of a caller-supplied tree
//!
//! ## Selection
//! - `GET /api/v1/selection` - Current selection
//! - `POST /api/v1/selection/view` - Switch view
//! - `POST /api/v1/selection/record` - Select record
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use synapse::api::{serve, AppState};
//! use synapse::config::Config;
//! use synapse::store::FixtureStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::new(
//!         Arc::new(FixtureStore::builtin()),
//!         config.layout_options(),
//!         config.server.clone(),
//!     );
//!
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let page_routes = Router::new()
        .route("/", get(routes::pages::dashboard))
        .route("/select/view", post(routes::pages::select_view))
        .route("/select/record", post(routes::pages::select_record));

    let api_routes = Router::new()
        // Repository routes
        .route("/repos", get(routes::repos::list_repos))
        .route("/repos/:id", get(routes::repos::get_repo))
        .route("/deep-dive", get(routes::repos::get_deep_dive))
        // Treemap routes
        .route("/treemap", get(routes::treemap::fixture_layout))
        .route("/treemap/layout", post(routes::treemap::custom_layout))
        // Selection routes
        .route("/selection", get(routes::selection::get_selection))
        .route("/selection/view", post(routes::selection::select_view))
        .route("/selection/record", post(routes::selection::select_record));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    page_routes
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; permissive when none parse
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Synapse listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Synapse shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
