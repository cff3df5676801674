//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::selection::{SelectionState, View};
use crate::store::FixtureStore;
use crate::treemap::LayoutOptions;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only dashboard data
    pub store: Arc<FixtureStore>,
    /// The single selection; every transition takes the write lock
    selection: Arc<RwLock<SelectionState>>,
    /// Drawing area and padding for the treemap view
    pub layout: LayoutOptions,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<FixtureStore>, layout: LayoutOptions, config: ServerConfig) -> Self {
        let selection = SelectionState::new(&store);
        Self {
            store,
            selection: Arc::new(RwLock::new(selection)),
            layout,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// State backed by the compiled-in fixtures and default options
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(FixtureStore::builtin()),
            LayoutOptions::default(),
            ServerConfig::default(),
        )
    }

    /// Copy of the current selection
    pub async fn selection(&self) -> SelectionState {
        self.selection.read().await.clone()
    }

    /// Apply `select_view`; returns whether the view changed and the resulting state
    pub async fn select_view(&self, view: View) -> (bool, SelectionState) {
        let mut selection = self.selection.write().await;
        let changed = selection.view() != view;
        selection.select_view(view);
        (changed, selection.clone())
    }

    /// Apply `select_record`; returns whether it changed and the resulting state
    pub async fn select_record(&self, id: &str) -> (bool, SelectionState) {
        let mut selection = self.selection.write().await;
        let changed = selection.select_record(&self.store, id);
        (changed, selection.clone())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transitions_are_shared_between_clones() {
        let state = AppState::builtin();
        let other = state.clone();

        state.select_view(View::DeepDive).await;
        let (changed, snapshot) = other.select_record("bun").await;

        assert!(changed);
        assert_eq!(snapshot.view(), View::DeepDive);
        assert_eq!(state.selection().await.selected_id(), "bun");
    }

    #[tokio::test]
    async fn test_unknown_record_leaves_state() {
        let state = AppState::builtin();
        let before = state.selection().await;

        let (changed, after) = state.select_record("nope").await;
        assert!(!changed);
        assert_eq!(before, after);
    }
}
