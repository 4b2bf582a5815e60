//! Server configuration parsing.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Server configuration loaded from TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server settings.
    pub server: ServerConfig,
    /// Cross-origin request policy.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Report store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Server bind settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory of static files served for unmatched paths.
    #[serde(default)]
    pub static_path: Option<String>,
}

/// CORS settings. Cross-origin requests are denied unless enabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    /// Allowed origins; "*" allows any.
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache duration in seconds.
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allow_origins: Vec::new(),
            allow_methods: vec!["GET".into(), "POST".into()],
            allow_headers: vec!["content-type".into(), "accept".into()],
            allow_credentials: false,
            max_age: 3600,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "carbon_footprint=debug,tower_http=info".
    pub level: String,
    pub format: LogFormat,
    /// "stdout", "stderr", or a file path to append to.
    pub output: String,
    /// ANSI colors (text format on a terminal only).
    pub color: bool,
    /// Include the event target.
    pub target: bool,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Text,
            output: "stdout".into(),
            color: true,
            target: true,
            timestamps: true,
        }
    }
}

/// Report store settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// CSV export to preload into the store at startup.
    pub seed_csv: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        content.parse()
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[server]
bind = "127.0.0.1"
port = 8080
"#;
        let config: Config = toml.parse().unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.server.static_path, None);
        assert!(!config.cors.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.store.seed_csv, None);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
bind = "0.0.0.0"
port = 9000
static_path = "./public"

[cors]
enabled = true
allow_origins = ["https://reports.example.com"]

[logging]
level = "carbon_footprint=debug"
format = "json"
output = "stderr"
timestamps = false

[store]
seed_csv = "reports.csv"
"#;
        let config: Config = toml.parse().unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.static_path.as_deref(), Some("./public"));
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allow_origins, ["https://reports.example.com"]);
        assert_eq!(config.cors.allow_methods, ["GET", "POST"]);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.output, "stderr");
        assert!(!config.logging.timestamps);
        assert!(config.logging.color);
        assert_eq!(config.store.seed_csv.as_deref(), Some("reports.csv"));
    }

    #[test]
    fn test_missing_server_section_fails() {
        let err = "[logging]\nlevel = \"debug\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/carbon-footprint-server.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/carbon-footprint-server.toml"));
    }
}
