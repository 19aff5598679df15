//! Application configuration loaded from environment variables.

use std::ffi::OsString;

use serde::Deserialize;

/// Environment name that enables debug-level logging by default.
pub const DEVELOPMENT: &str = "development";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Reported Values ===
    /// Version string reported by `/` and `/health`.
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Deployment environment name reported by `/` and `/api/status`.
    #[serde(default = "default_environment")]
    pub environment: String,

    // === Server Configuration ===
    /// Interface to bind the HTTP server on.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_environment() -> String {
    DEVELOPMENT.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars_os())
    }

    /// Build configuration from raw variables.
    ///
    /// Entries whose name or value is not valid Unicode are skipped, so an
    /// unrelated variable cannot abort startup.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        envy::from_iter(
            vars.into_iter()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Apply command-line overrides for host and port.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    /// Whether the service runs in the development environment.
    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }

    /// Log filter directive.
    ///
    /// `verbose` wins over an explicit `RUST_LOG`, which wins over the
    /// environment-derived default.
    pub fn log_filter(&self, verbose: bool, rust_log_env: Option<&str>) -> String {
        if verbose {
            return "cicd_playground=debug,tower_http=debug,info".to_string();
        }

        match rust_log_env.map(str::trim).filter(|s| !s.is_empty()) {
            Some(directive) => directive.to_string(),
            None if self.is_development() => format!("cicd_playground=debug,{}", self.rust_log),
            None => self.rust_log.clone(),
        }
    }

    /// Socket address the server should bind to.
    pub fn bind_addr(&self) -> String {
        // Bracket bare IPv6 hosts so the port suffix stays unambiguous.
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            environment: default_environment(),
            host: default_host(),
            port: default_port(),
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
