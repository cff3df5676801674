//! Synapse Rendering
//!
//! Server-side HTML for the dashboard. Every renderer is a pure function of
//! the fixture store, the selection state and the layout options.
//!
//! - **page**: Document shell, sidebar, header, navigation wiring
//! - **list**: Ranked list plus detail panel
//! - **treemap**: Tiles and category labels over a computed layout
//! - **deep_dive**: Featured project page
//! - **format**: Shared display helpers
//!
//! # Example
//!
//! ```rust
//! use synapse::render::{render_page, PageOptions};
//! use synapse::selection::{SelectionState, View};
//! use synapse::store::FixtureStore;
//!
//! let store = FixtureStore::builtin();
//! let mut state = SelectionState::new(&store);
//! state.select_view(View::Treemap);
//!
//! let html = render_page(&store, &state, &PageOptions::default())?;
//! assert!(html.contains("Tech Pulse Treemap"));
//! # Ok::<(), synapse::treemap::TreemapError>(())
//! ```

pub mod deep_dive;
pub mod format;
pub mod list;
pub mod page;
pub mod treemap;

pub use page::{Navigation, StaticLinks};

use crate::selection::{SelectionState, View};
use crate::store::FixtureStore;
use crate::treemap::{layout, LayoutOptions, TreemapResult};

/// Inputs to a render besides the data and selection
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub layout: LayoutOptions,
    pub nav: Navigation,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            nav: Navigation::Server,
        }
    }
}

impl PageOptions {
    pub fn new(layout: LayoutOptions, nav: Navigation) -> Self {
        Self { layout, nav }
    }
}

/// Body markup for the active view only
pub fn render_view(
    store: &FixtureStore,
    state: &SelectionState,
    options: &PageOptions,
) -> TreemapResult<String> {
    let body = match state.view() {
        View::List => list::render_list_view(store.repos(), state.selected(store), &options.nav),
        View::Treemap => {
            let result = layout(store.size_tree(), &options.layout)?;
            treemap::render_treemap_view(&result)
        }
        View::DeepDive => deep_dive::render_deep_dive_view(store.deep_dive(), &options.nav),
    };
    Ok(body)
}

/// Full HTML document for the active view
///
/// Fails only when the treemap view is active and the layout options are
/// invalid.
pub fn render_page(
    store: &FixtureStore,
    state: &SelectionState,
    options: &PageOptions,
) -> TreemapResult<String> {
    let body = render_view(store, state, options)?;
    let title = match state.view() {
        View::List => format!("Synapse - {}", state.selected(store).full_name()),
        View::Treemap => "Synapse - Tech Pulse".to_string(),
        View::DeepDive => format!("Synapse - {}", store.deep_dive().title),
    };

    Ok(page::render_document(&title, state.view(), &options.nav, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treemap::TreemapError;

    #[test]
    fn test_initial_page_is_list_with_first_record() {
        let store = FixtureStore::builtin();
        let state = SelectionState::new(&store);
        let html = render_page(&store, &state, &PageOptions::default()).unwrap();

        assert!(html.contains("<title>Synapse - AutoGPT/AutoGPT</title>"));
        assert!(html.contains("repo-card selected"));
        assert!(html.contains("<h2>AutoGPT</h2>"));
    }

    #[test]
    fn test_each_view_renders_its_body() {
        let store = FixtureStore::builtin();
        let mut state = SelectionState::new(&store);
        let options = PageOptions::default();

        state.select_view(View::Treemap);
        let treemap = render_view(&store, &state, &options).unwrap();
        assert!(treemap.contains("treemap-view"));
        assert!(!treemap.contains("repo-card"));

        state.select_view(View::DeepDive);
        let deep_dive = render_view(&store, &state, &options).unwrap();
        assert!(deep_dive.contains("Why it Matters"));
    }

    #[test]
    fn test_record_selection_changes_detail_panel() {
        let store = FixtureStore::builtin();
        let mut state = SelectionState::new(&store);
        state.select_record(&store, "rust");

        let html = render_view(&store, &state, &PageOptions::default()).unwrap();
        assert!(html.contains("Rank #4"));
    }

    #[test]
    fn test_invalid_layout_surfaces_error() {
        let store = FixtureStore::builtin();
        let mut state = SelectionState::new(&store);
        let options = PageOptions::new(LayoutOptions::new(-1.0, 600.0), Navigation::Server);

        // List view does not lay anything out
        assert!(render_page(&store, &state, &options).is_ok());

        state.select_view(View::Treemap);
        let err = render_page(&store, &state, &options).unwrap_err();
        assert!(matches!(err, TreemapError::InvalidDimensions(_)));
    }
}
