//! Synapse Reports
//!
//! Offline outputs built from the fixture store:
//!
//! - **markdown**: Daily digest
//! - **rss**: RSS 2.0 feed of the top records
//! - **export**: Dated static snapshot of every view plus the digest and feed

pub mod export;
pub mod markdown;
pub mod rss;

pub use export::{export_snapshot, view_links, ExportError, ExportOptions, ExportResult, ExportSummary};
pub use markdown::generate_markdown;
pub use rss::{generate_rss, FEED_ITEMS};
