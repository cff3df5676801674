//! Synapse Fixture Store
//!
//! Read-only, compiled-in data behind every view:
//!
//! - **types**: Record definitions (RepoRecord, DeepDiveRecord, SizeTreeNode)
//! - **fixtures**: The constant data tables
//! - **catalog**: `FixtureStore`, the validated container handed to renderers
//! - **error**: Store construction errors
//!
//! # Example
//!
//! ```rust
//! use synapse::store::FixtureStore;
//!
//! let store = FixtureStore::builtin();
//! assert_eq!(store.first().rank, 1);
//! assert!(store.get("omniparse").is_some());
//! ```

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod types;

// Re-export commonly used types
pub use catalog::{FixtureStore, StoreStats};
pub use error::{StoreError, StoreResult};
pub use types::{Comment, Comparison, Competitor, DeepDiveRecord, RepoRecord, SizeTreeNode, Trend};
