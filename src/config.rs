//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::report::ExportOptions;
use crate::treemap::LayoutOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub treemap: TreemapConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8086".to_string(),
        "http://127.0.0.1:8086".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Treemap drawing area and padding
#[derive(Debug, Clone, Deserialize)]
pub struct TreemapConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_padding_outer")]
    pub padding_outer: f64,

    #[serde(default = "default_padding_top")]
    pub padding_top: f64,

    #[serde(default = "default_padding_inner")]
    pub padding_inner: f64,

    #[serde(default = "default_round")]
    pub round: bool,
}

fn default_width() -> f64 {
    1200.0
}

fn default_height() -> f64 {
    600.0
}

fn default_padding_outer() -> f64 {
    4.0
}

fn default_padding_top() -> f64 {
    20.0 // room for the category label
}

fn default_padding_inner() -> f64 {
    4.0
}

fn default_round() -> bool {
    true
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding_outer: default_padding_outer(),
            padding_top: default_padding_top(),
            padding_inner: default_padding_inner(),
            round: default_round(),
        }
    }
}

impl From<&TreemapConfig> for LayoutOptions {
    fn from(config: &TreemapConfig) -> Self {
        LayoutOptions::new(config.width, config.height)
            .padding(config.padding_outer, config.padding_top, config.padding_inner)
            .round(config.round)
    }
}

/// Static export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default = "default_feed_base_url")]
    pub feed_base_url: String,
}

fn default_out_dir() -> String {
    "archives".to_string()
}

fn default_feed_base_url() -> String {
    "https://github.com/trending".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            feed_base_url: default_feed_base_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    /// Parse TOML content; `path` is only used in error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("synapse").join("config.toml")),
            Some(PathBuf::from("/etc/synapse/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file in `paths`, falling back to the environment.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn load_first(paths: &[PathBuf]) -> Self {
        for path_opt in paths {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Layout options for the treemap view
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::from(&self.treemap)
    }

    /// Export options for static snapshots
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new(&self.export.out_dir)
            .base_url(self.export.feed_base_url.clone())
            .layout(self.layout_options())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("SYNAPSE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SYNAPSE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid SYNAPSE_PORT: {}", port),
            }
        }

        // Export overrides
        if let Some(dir) = lookup("SYNAPSE_EXPORT_DIR") {
            self.export.out_dir = dir;
        }

        // Logging overrides
        if let Some(level) = lookup("SYNAPSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SYNAPSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Synapse Configuration
#
# Environment variables override these settings:
# - SYNAPSE_HOST
# - SYNAPSE_PORT
# - SYNAPSE_EXPORT_DIR
# - SYNAPSE_LOG_LEVEL
# - SYNAPSE_LOG_FORMAT

[server]
# Server host
host = "127.0.0.1"

# Server port
port = 8086

# Allowed CORS origins for the JSON API
cors_origins = ["http://localhost:8086", "http://127.0.0.1:8086"]

[treemap]
# Drawing area in layout units
width = 1200
height = 600

# Padding around each category, the label band above it, and the gap between tiles
padding_outer = 4
padding_top = 20
padding_inner = 4

# Round rectangle edges to whole units
round = true

[export]
# Output directory for static snapshots
out_dir = "archives"

# Channel link used in rss.xml
feed_base_url = "https://github.com/trending"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/synapse/synapse.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_round_trips() {
        let parsed = Config::parse(Path::new("default.toml"), &generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.server.port, defaults.server.port);
        assert_eq!(parsed.server.cors_origins, defaults.server.cors_origins);
        assert_eq!(parsed.layout_options(), defaults.layout_options());
        assert_eq!(parsed.export.out_dir, "archives");
        assert!(parsed.logging.file.is_none());
    }

    #[test]
    fn test_defaults_match_layout_defaults() {
        assert_eq!(Config::default().layout_options(), LayoutOptions::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse(
            Path::new("partial.toml"),
            "[treemap]\nwidth = 800\nround = false\n",
        )
        .unwrap();

        let layout = config.layout_options();
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 600.0);
        assert_eq!(layout.padding_top, 20.0);
        assert!(!layout.round);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\n[export]\nout_dir = \"site\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.export_options().out_dir, PathBuf::from("site"));
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = Config::parse(Path::new("bad.toml"), "[server]\nport = \"eighty\"\n");
        assert!(matches!(bad, Err(ConfigError::Parse { .. })));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_first_skips_malformed_file_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("broken.toml");
        let good = temp_dir.path().join("good.toml");
        std::fs::write(&broken, "[treemap\nwidth = 800").unwrap();
        std::fs::write(&good, "[treemap]\nwidth = 640.0\n").unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::load_first(&[temp_dir.path().join("absent.toml"), broken.clone(), good.clone()])
        });

        assert_eq!(config.treemap.width, 640.0);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Failed to load config"));
        assert!(output.contains("broken.toml"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SYNAPSE_HOST", "0.0.0.0"),
            ("SYNAPSE_PORT", "not-a-port"),
            ("SYNAPSE_EXPORT_DIR", "/tmp/synapse"),
            ("SYNAPSE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8086);
        assert_eq!(config.export.out_dir, "/tmp/synapse");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
