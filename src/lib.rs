//! # Synapse
//!
//! A trending-repository dashboard: a ranked list with a detail panel, a
//! category treemap, and a featured deep-dive page, rendered server-side from
//! compiled-in fixture data.
//!
//! ## Features
//!
//! - **Squarified treemap**: Deterministic, padded, nested area partitioning
//! - **Explicit selection state**: One active view and one selected record,
//!   changed only through two transitions
//! - **Server-rendered HTML**: Served by Axum or exported as a static snapshot
//! - **Reports**: Markdown digest and RSS feed of the trending list
//!
//! ## Modules
//!
//! - [`store`]: Fixture records and the category size tree
//! - [`treemap`]: Layout engine
//! - [`selection`]: View and record selection
//! - [`render`]: HTML renderers
//! - [`report`]: Markdown, RSS and static export
//! - [`api`]: HTTP host with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use synapse::render::{render_page, PageOptions};
//! use synapse::selection::{SelectionState, View};
//! use synapse::store::FixtureStore;
//!
//! let store = FixtureStore::builtin();
//! let mut state = SelectionState::new(&store);
//!
//! // Unknown ids are ignored
//! assert!(!state.select_record(&store, "no-such-repo"));
//! assert!(state.select_record(&store, "bun"));
//! state.select_view(View::Treemap);
//! state.select_view(View::List);
//!
//! let html = render_page(&store, &state, &PageOptions::default())?;
//! assert!(html.contains("oven-sh / bun"));
//! # Ok::<(), synapse::treemap::TreemapError>(())
//! ```

pub mod api;
pub mod config;
pub mod render;
pub mod report;
pub mod selection;
pub mod store;
pub mod treemap;

// Re-export top-level types for convenience
pub use store::{
    Comment, Comparison, Competitor, DeepDiveRecord, FixtureStore, RepoRecord, SizeTreeNode,
    StoreError, StoreResult, StoreStats, Trend,
};

pub use treemap::{layout, LayoutNode, LayoutOptions, Rect, TreemapError, TreemapLayout, TreemapResult};

pub use selection::{SelectionState, UnknownView, View};

pub use render::{render_page, render_view, Navigation, PageOptions};

pub use report::{export_snapshot, generate_markdown, generate_rss, ExportError, ExportOptions};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
