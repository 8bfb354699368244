//! Configuration loading from calendar.toml.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Listener configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Log level and output format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP response behaviour.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Listener configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// File served at `/`, if any.
    pub index_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            index_file: None,
        }
    }
}

impl ServerConfig {
    /// Resolve `host` and `port` to the listen address.
    ///
    /// `host` may be an IPv4 or IPv6 literal or a name such as `localhost`.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::InvalidAddress(self.host.clone()))
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// HTTP response configuration.
#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Answer unknown ids on update/delete with 503 instead of 404.
    #[serde(default = "default_legacy_not_found_status")]
    pub legacy_not_found_status: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            legacy_not_found_status: default_legacy_not_found_status(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_level() -> String {
    "info".to_string()
}

fn default_legacy_not_found_status() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.server.index_file.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.http.legacy_not_found_status);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9090
index_file = "static/index.html"

[logging]
level = "debug"
format = "json"

[http]
legacy_not_found_status = false
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.server.addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(
            config.server.index_file.as_deref(),
            Some(Path::new("static/index.html"))
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.http.legacy_not_found_status);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = Config::parse("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_host_names_and_ipv6_resolve() {
        let config = Config::parse("[server]\nhost = \"localhost\"\nport = 9000").unwrap();
        let addr = config.server.addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9000);

        let config = Config::parse("[server]\nhost = \"::\"").unwrap();
        let addr = config.server.addr().unwrap();
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_host() {
        let config = Config::parse("[server]\nhost = \"not a host\"").unwrap();
        assert!(matches!(
            config.server.addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 3000").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);

        assert!(matches!(
            Config::load("/nonexistent/calendar.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
