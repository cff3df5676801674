//! Synapse Server
//!
//! Run with: cargo run --bin synapse
//!
//! # Configuration
//!
//! Reads `SYNAPSE_CONFIG` if set, otherwise the default config locations
//! (see [`synapse::config::Config::load_default`]). Environment variables
//! `SYNAPSE_HOST`, `SYNAPSE_PORT`, `SYNAPSE_LOG_LEVEL` and
//! `SYNAPSE_LOG_FORMAT` override the file; `RUST_LOG` overrides the level.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use synapse::api::{serve, AppState};
use synapse::config::{Config, LoggingConfig};
use synapse::store::FixtureStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config messages go to stderr until the configured subscriber is installed
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        match std::env::var("SYNAPSE_CONFIG") {
            Ok(path) => Config::load_with_env(&PathBuf::from(path)),
            Err(_) => Ok(Config::load_default()),
        }
    })?;

    init_logging(&config.logging)?;

    tracing::info!("Starting Synapse v{}", env!("CARGO_PKG_VERSION"));

    let layout = config.layout_options();
    layout.validate()?;

    let store = Arc::new(FixtureStore::builtin());
    tracing::info!("Fixture store: {}", store.stats());

    let state = AppState::new(store, layout, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Synapse stopped");
    Ok(())
}

fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synapse=info")),
        )
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the global subscriber: pretty or JSON, to stdout or a file
fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("synapse={},tower_http=info", config.level)));

    let json = config.format.eq_ignore_ascii_case("json");
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            if json {
                fmt::layer().json().with_writer(Mutex::new(file)).boxed()
            } else {
                fmt::layer().with_ansi(false).with_writer(Mutex::new(file)).boxed()
            }
        }
        None if json => fmt::layer().json().boxed(),
        None => fmt::layer().boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).try_init()?;
    Ok(())
}
