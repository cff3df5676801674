//! Selection State
//!
//! The only mutable part of the dashboard: which top-level view is active and
//! which repository the list/detail view shows. Fields are private; the two
//! transitions below are the only way to change them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::store::{FixtureStore, RepoRecord};

/// Top-level views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Ranked list plus detail panel
    #[default]
    #[serde(rename = "list-view", alias = "list", alias = "dashboard")]
    List,
    /// Category treemap
    #[serde(rename = "treemap-view", alias = "treemap")]
    Treemap,
    /// Featured project page
    #[serde(rename = "deep-dive-view", alias = "deep-dive")]
    DeepDive,
}

impl View {
    /// Get all views for iteration
    pub fn all() -> &'static [View] {
        &[View::List, View::Treemap, View::DeepDive]
    }

    /// Canonical identifier (`list-view`, `treemap-view`, `deep-dive-view`)
    pub fn as_str(&self) -> &'static str {
        match self {
            View::List => "list-view",
            View::Treemap => "treemap-view",
            View::DeepDive => "deep-dive-view",
        }
    }

    /// Short slug used in exported file names
    pub fn slug(&self) -> &'static str {
        match self {
            View::List => "list",
            View::Treemap => "treemap",
            View::DeepDive => "deep-dive",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized view identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view: {0} (expected list-view, treemap-view or deep-dive-view)")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list-view" | "list" | "dashboard" => Ok(View::List),
            "treemap-view" | "treemap" => Ok(View::Treemap),
            "deep-dive-view" | "deep-dive" | "deepdive" => Ok(View::DeepDive),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Active view plus selected repository id
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectionState {
    view: View,
    selected_id: String,
}

impl SelectionState {
    /// Initial state: list view, first record in rank order
    pub fn new(store: &FixtureStore) -> Self {
        Self {
            view: View::List,
            selected_id: store.first().id.clone(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    /// The selected record
    ///
    /// Falls back to the first record if `store` is not the store this
    /// state was created from and lacks the id.
    pub fn selected<'a>(&self, store: &'a FixtureStore) -> &'a RepoRecord {
        store.get(&self.selected_id).unwrap_or_else(|| store.first())
    }

    /// Switch the active view; the record selection is left alone
    pub fn select_view(&mut self, view: View) {
        if self.view != view {
            tracing::info!(from = %self.view, to = %view, "View changed");
        }
        self.view = view;
    }

    /// Select a record by id
    ///
    /// Unknown ids are ignored. Returns whether the selection changed.
    pub fn select_record(&mut self, store: &FixtureStore, id: &str) -> bool {
        if !store.contains(id) {
            tracing::debug!(id = %id, "Ignoring selection of unknown record");
            return false;
        }
        if self.selected_id == id {
            return false;
        }

        tracing::info!(from = %self.selected_id, to = %id, "Record selected");
        self.selected_id = id.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = FixtureStore::builtin();
        let state = SelectionState::new(&store);

        assert_eq!(state.view(), View::List);
        assert_eq!(state.selected_id(), store.repos()[0].id);
    }

    #[test]
    fn test_view_changes_keep_record_selection() {
        let store = FixtureStore::builtin();
        let mut state = SelectionState::new(&store);
        assert!(state.select_record(&store, "bun"));

        state.select_view(View::Treemap);
        assert_eq!(state.view(), View::Treemap);
        state.select_view(View::List);

        assert_eq!(state.view(), View::List);
        assert_eq!(state.selected_id(), "bun");
    }

    #[test]
    fn test_select_known_record() {
        let store = FixtureStore::builtin();
        let mut state = SelectionState::new(&store);

        assert!(state.select_record(&store, "omniparse"));
        assert_eq!(state.selected(&store).name, "OmniParse");
        // Reselecting is not a change
        assert!(!state.select_record(&store, "omniparse"));
    }

    #[test]
    fn test_select_unknown_record_is_noop() {
        let store = FixtureStore::builtin();
        let mut state = SelectionState::new(&store);
        state.select_record(&store, "rust");
        let before = state.clone();

        assert!(!state.select_record(&store, "does-not-exist"));
        assert!(!state.select_record(&store, "does-not-exist"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_view_parsing() {
        assert_eq!("treemap-view".parse::<View>().unwrap(), View::Treemap);
        assert_eq!("Deep-Dive".parse::<View>().unwrap(), View::DeepDive);
        assert_eq!("dashboard".parse::<View>().unwrap(), View::List);
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_view_serialization() {
        assert_eq!(serde_json::to_string(&View::DeepDive).unwrap(), "\"deep-dive-view\"");
        let view: View = serde_json::from_str("\"treemap\"").unwrap();
        assert_eq!(view, View::Treemap);
    }

    #[test]
    fn test_state_serialization() {
        let store = FixtureStore::builtin();
        let state = SelectionState::new(&store);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["view"], "list-view");
        assert_eq!(json["selected_id"], "autogpt");
    }
}
