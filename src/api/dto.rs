//! Data Transfer Objects
//!
//! Request and response types for the HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::selection::{SelectionState, View};
use crate::store::{RepoRecord, SizeTreeNode, StoreStats};
use crate::treemap::LayoutOptions;

// ============================================
// REPOSITORY DTOs
// ============================================

/// Repository list response
#[derive(Debug, Serialize)]
pub struct RepoListResponse {
    pub repos: Vec<RepoRecord>,
    pub total: usize,
    pub new_count: usize,
}

// ============================================
// TREEMAP DTOs
// ============================================

/// Query for the fixture treemap; missing fields use the server defaults
#[derive(Debug, Default, Deserialize)]
pub struct TreemapQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Layout request for a caller-supplied tree
#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub tree: SizeTreeNode,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub padding_outer: Option<f64>,
    #[serde(default)]
    pub padding_top: Option<f64>,
    #[serde(default)]
    pub padding_inner: Option<f64>,
    #[serde(default)]
    pub round: Option<bool>,
}

impl LayoutRequest {
    /// Request fields over `defaults`
    pub fn options(&self, defaults: LayoutOptions) -> LayoutOptions {
        LayoutOptions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            padding_outer: self.padding_outer.unwrap_or(defaults.padding_outer),
            padding_top: self.padding_top.unwrap_or(defaults.padding_top),
            padding_inner: self.padding_inner.unwrap_or(defaults.padding_inner),
            round: self.round.unwrap_or(defaults.round),
        }
    }
}

// ============================================
// SELECTION DTOs
// ============================================

/// View selection request (JSON body or form field `view`)
#[derive(Debug, Deserialize)]
pub struct SelectViewRequest {
    pub view: String,
}

impl SelectViewRequest {
    pub fn parse(&self) -> Result<View, crate::selection::UnknownView> {
        self.view.parse()
    }
}

/// Record selection request (JSON body or form field `id`)
#[derive(Debug, Deserialize)]
pub struct SelectRecordRequest {
    pub id: String,
}

/// Current selection
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub view: View,
    pub selected_id: String,
    /// Present on transition responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
}

impl SelectionResponse {
    pub fn snapshot(state: &SelectionState) -> Self {
        Self {
            view: state.view(),
            selected_id: state.selected_id().to_string(),
            changed: None,
        }
    }

    pub fn transition(state: &SelectionState, changed: bool) -> Self {
        Self {
            changed: Some(changed),
            ..Self::snapshot(state)
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" when the fixture store is populated
    pub store: String,
    /// "ok" when the fixture tree lays out with the server options
    pub treemap: String,
    pub repos: usize,
    pub tree_nodes: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

impl HealthResponse {
    pub fn new(stats: &StoreStats, treemap_ok: bool, uptime_seconds: u64) -> Self {
        let store_ok = stats.repo_count > 0;
        Self {
            status: if store_ok && treemap_ok { "healthy" } else { "degraded" }.to_string(),
            store: if store_ok { "ok" } else { "error" }.to_string(),
            treemap: if treemap_ok { "ok" } else { "error" }.to_string(),
            repos: stats.repo_count,
            tree_nodes: stats.tree_nodes,
            uptime_seconds,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
