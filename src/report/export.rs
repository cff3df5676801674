//! Static snapshot export
//!
//! Writes every view as a standalone HTML file, plus the Markdown digest and
//! the RSS feed:
//!
//! ```text
//! <out>/index.html                       list view (links into YYYY/MM/)
//! <out>/rss.xml
//! <out>/YYYY/MM/YYYY-MM-DD.html          list view
//! <out>/YYYY/MM/YYYY-MM-DD_treemap.html
//! <out>/YYYY/MM/YYYY-MM-DD_deep-dive.html
//! <out>/YYYY/MM/YYYY-MM-DD.md
//! ```

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::markdown::generate_markdown;
use super::rss::generate_rss;
use crate::render::{render_page, Navigation, PageOptions, StaticLinks};
use crate::selection::{SelectionState, View};
use crate::store::FixtureStore;
use crate::treemap::{LayoutOptions, TreemapError};

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing an output file failed
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Feed serialization failed
    #[error("Feed error: {0}")]
    Feed(String),

    /// The treemap view could not be laid out
    #[error("Layout error: {0}")]
    Layout(#[from] TreemapError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Where and how to export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Channel link in the feed
    pub base_url: String,
    pub layout: LayoutOptions,
}

impl ExportOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            base_url: "https://github.com/trending".to_string(),
            layout: LayoutOptions::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }
}

/// Files written by one export
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Write a dated snapshot of the dashboard
pub fn export_snapshot(
    store: &FixtureStore,
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> ExportResult<ExportSummary> {
    let date = now.date_naive();
    let stem = date.format("%Y-%m-%d").to_string();
    let month_dir = PathBuf::from(date.format("%Y").to_string()).join(date.format("%m").to_string());
    let archive_dir = options.out_dir.join(&month_dir);

    create_dir(&archive_dir)?;

    let mut summary = ExportSummary::default();
    let local = view_links(&stem, "");

    for view in View::all() {
        let html = render_snapshot(store, *view, &options.layout, local.clone())?;
        let path = archive_dir.join(local.href(*view));
        write_file(&path, &html)?;
        summary.files.push(path);
    }

    // The index lives two directories up, so its links need the archive prefix
    let prefix = format!("{}/", month_dir.to_string_lossy().replace('\\', "/"));
    let index = render_snapshot(store, View::List, &options.layout, view_links(&stem, &prefix))?;
    let index_path = options.out_dir.join("index.html");
    write_file(&index_path, &index)?;
    summary.files.push(index_path);

    let md_path = archive_dir.join(format!("{}.md", stem));
    write_file(&md_path, &generate_markdown(store, date))?;
    summary.files.push(md_path);

    let rss_path = options.out_dir.join("rss.xml");
    write_file(&rss_path, &generate_rss(store, now, &options.base_url)?)?;
    summary.files.push(rss_path);

    tracing::info!(
        out_dir = %options.out_dir.display(),
        files = summary.len(),
        "Exported snapshot for {}",
        stem
    );

    Ok(summary)
}

/// File names of the three views for a date, with an optional path prefix
pub fn view_links(stem: &str, prefix: &str) -> StaticLinks {
    StaticLinks {
        list: format!("{}{}.html", prefix, stem),
        treemap: format!("{}{}_{}.html", prefix, stem, View::Treemap.slug()),
        deep_dive: format!("{}{}_{}.html", prefix, stem, View::DeepDive.slug()),
    }
}

fn render_snapshot(
    store: &FixtureStore,
    view: View,
    layout: &LayoutOptions,
    links: StaticLinks,
) -> ExportResult<String> {
    let mut state = SelectionState::new(store);
    state.select_view(view);

    let options = PageOptions::new(*layout, Navigation::Static(links));
    Ok(render_page(store, &state, &options)?)
}

fn create_dir(path: &Path) -> ExportResult<()> {
    fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> ExportResult<()> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
