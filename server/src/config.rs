//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Default upstream endpoint serving the raw observations.
pub const DEFAULT_RATES_URL: &str = "https://ile-b2p4.essentialdeveloper.com/rates";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address '{0}'")]
    InvalidListenAddr(String),

    #[error("{0}")]
    Invalid(String),
}

/// Main server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub listen_addr: SocketAddr,
    /// Upstream rates endpoint.
    pub rates_url: String,
    /// Timeout for a single upstream fetch.
    pub upstream_timeout: Duration,
    /// Timeout for a whole client request.
    pub request_timeout: Duration,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            rates_url: DEFAULT_RATES_URL.to_string(),
            upstream_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LISTEN_ADDR").filter(|v| !v.is_empty()) {
            config.listen_addr = parse_listen_addr(&addr)?;
        }

        if let Some(url) = lookup("RATES_ENDPOINT_URL").filter(|v| !v.is_empty()) {
            config.rates_url = url;
        }

        if let Some(ms) = lookup("UPSTREAM_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            config.upstream_timeout = Duration::from_millis(ms);
        }

        if let Some(ms) = lookup("REQUEST_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            config.request_timeout = Duration::from_millis(ms);
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|v| !v.is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.port() == 0 {
            return Err(ConfigError::Invalid("Listen port cannot be 0".to_string()));
        }

        if self.rates_url.is_empty() {
            return Err(ConfigError::Invalid("Rates URL cannot be empty".to_string()));
        }

        if !(self.rates_url.starts_with("http://") || self.rates_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "Rates URL must be http(s): {}",
                self.rates_url
            )));
        }

        if self.upstream_timeout.is_zero() || self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid("Timeouts cannot be 0".to_string()));
        }

        Ok(())
    }
}

/// Accepts `host:port` as well as the bare `:port` form, which binds all interfaces.
fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    let candidate = if value.starts_with(':') {
        format!("0.0.0.0{value}")
    } else {
        value.to_string()
    };

    candidate
        .parse()
        .map_err(|_| ConfigError::InvalidListenAddr(value.to_string()))
}
