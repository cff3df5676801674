//! Synapse CLI
//!
//! Command-line interface for Synapse:
//! - Inspect the fixture data and treemap layout
//! - Render a view or export a static snapshot offline
//! - Drive the selection of a running server

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use synapse::config::{generate_default_config, Config};
use synapse::render::{render_page, PageOptions};
use synapse::report::export_snapshot;
use synapse::selection::{SelectionState, View};
use synapse::store::FixtureStore;
use synapse::treemap::layout;

#[derive(Parser)]
#[command(name = "synapse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Trending-repository dashboard")]
#[command(long_about = "Synapse renders a trending-repository dashboard: a ranked list, a category treemap,\nand a featured deep dive. Use it offline or against a running server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://127.0.0.1:8086", global = true)]
    pub api_url: String,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the trending repositories
    Repos,

    /// Print the treemap layout of the category tree
    Layout {
        /// Drawing width (default: from config)
        #[arg(long)]
        width: Option<f64>,
        /// Drawing height (default: from config)
        #[arg(long)]
        height: Option<f64>,
    },

    /// Render one view to HTML
    Render {
        /// View to render (list, treemap, deep-dive)
        #[arg(short, long, default_value = "list-view")]
        view: String,
        /// Repository to select in the list view
        #[arg(short, long)]
        repo: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a dated static snapshot (HTML views, Markdown digest, RSS feed)
    Export {
        /// Output directory (default: from config)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Snapshot date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show server status
    Status,

    /// Switch the active view on a running server
    View {
        /// list, treemap or deep-dive
        view: String,
    },

    /// Select a repository on a running server
    Select {
        /// Repository id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };
    let store = FixtureStore::builtin();

    match cli.command {
        Commands::Repos => {
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(store.repos())?);
            } else {
                println!(
                    "{:<4} {:<28} {:<12} {:<8} {:<6} {}",
                    "#", "Repository", "Language", "Stars", "HN", "Category"
                );
                println!("{}", "-".repeat(76));
                for repo in store.repos() {
                    let name = if repo.is_new {
                        format!("{} *", repo.full_name())
                    } else {
                        repo.full_name()
                    };
                    println!(
                        "{:<4} {:<28} {:<12} {:<8} {:<6} {}",
                        repo.rank, name, repo.language, repo.stars, repo.hn_comments, repo.category
                    );
                }
                println!();
                println!("{}", store.stats());
            }
        }

        Commands::Layout { width, height } => {
            let mut options = config.layout_options();
            if let Some(w) = width {
                options.width = w;
            }
            if let Some(h) = height {
                options.height = h;
            }

            let result = layout(store.size_tree(), &options)?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{:<24} {:>5} {:>10} {:>7} {:>7} {:>7} {:>7}",
                    "Node", "Depth", "Value", "x0", "y0", "x1", "y1"
                );
                println!("{}", "-".repeat(72));
                for node in &result.nodes {
                    let name = format!("{}{}", "  ".repeat(node.depth), node.name);
                    println!(
                        "{:<24} {:>5} {:>10} {:>7} {:>7} {:>7} {:>7}",
                        name,
                        node.depth,
                        node.value,
                        node.rect.x0,
                        node.rect.y0,
                        node.rect.x1,
                        node.rect.y1
                    );
                }
            }
        }

        Commands::Render { view, repo, output } => {
            let view: View = view.parse()?;
            let mut state = SelectionState::new(&store);
            if let Some(id) = repo {
                if !state.select_record(&store, &id) && state.selected_id() != id {
                    bail!("Unknown repository: {}", id);
                }
            }
            state.select_view(view);

            let options = PageOptions {
                layout: config.layout_options(),
                ..PageOptions::default()
            };
            let html = render_page(&store, &state, &options)?;

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &html)?;
                    println!("Rendered {} to {:?}", view, path);
                }
                None => print!("{}", html),
            }
        }

        Commands::Export { out_dir, date } => {
            let now = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", d))?
                    .and_hms_opt(0, 0, 0)
                    .context("Invalid time")?
                    .and_utc(),
                None => Utc::now(),
            };

            let mut options = config.export_options();
            if let Some(dir) = out_dir {
                options.out_dir = dir;
            }

            let summary = export_snapshot(&store, &options, now)?;
            println!("Exported {} files to {:?}:", summary.len(), options.out_dir);
            for file in &summary.files {
                println!("  {}", file.display());
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await
                .with_context(|| {
                    format!(
                        "Cannot connect to Synapse at {}\nMake sure the server is running:\n  cargo run --bin synapse",
                        cli.api_url
                    )
                })?;

            if !response.status().is_success() {
                bail!("Server returned error: {}", response.status());
            }

            let health: serde_json::Value = response.json().await?;
            let selection: serde_json::Value = client
                .get(format!("{}/api/v1/selection", cli.api_url))
                .send()
                .await?
                .json()
                .await?;

            if cli.format == "json" {
                let combined = serde_json::json!({ "health": health, "selection": selection });
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else {
                println!("Synapse v{}", health["version"].as_str().unwrap_or("unknown"));
                println!();
                println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                println!("  Repositories: {}", health["repos"]);
                println!("  Treemap nodes: {}", health["tree_nodes"]);
                println!("  Uptime: {}", format_duration(health["uptime_seconds"].as_u64().unwrap_or(0)));
                println!();
                println!("View: {}", selection["view"].as_str().unwrap_or("-"));
                println!("Selected: {}", selection["selected_id"].as_str().unwrap_or("-"));
            }
        }

        Commands::View { view } => {
            // Validate locally for a friendlier error
            let view: View = view.parse()?;
            let body = serde_json::json!({ "view": view.as_str() });
            let selection = post_selection(&cli.api_url, "view", &body).await?;
            println!("View: {}", selection["view"].as_str().unwrap_or("-"));
        }

        Commands::Select { id } => {
            let body = serde_json::json!({ "id": id });
            let selection = post_selection(&cli.api_url, "record", &body).await?;

            if selection["changed"].as_bool() == Some(true) {
                println!("Selected: {}", id);
            } else if selection["selected_id"].as_str() == Some(id.as_str()) {
                println!("Already selected: {}", id);
            } else {
                println!("Unknown repository '{}', selection unchanged", id);
            }
        }
    }

    Ok(())
}

async fn post_selection(
    api_url: &str,
    transition: &str,
    body: &serde_json::Value,
) -> anyhow::Result<serde_json::Value> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/v1/selection/{}", api_url, transition))
        .json(body)
        .send()
        .await
        .with_context(|| format!("Cannot connect to Synapse at {}", api_url))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        bail!("Request failed ({}): {}", status, text);
    }

    Ok(response.json().await?)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
