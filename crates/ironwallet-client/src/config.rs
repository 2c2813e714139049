//! Client configuration
//!
//! Configuration for the backend connection, built with [`ClientConfig::builder`]
//! or loaded from the environment with [`ClientConfig::from_env`].

use std::time::Duration;

/// Default backend URL when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Path prefix under which the backend mounts its REST API.
pub const API_PREFIX: &str = "/api";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    backend_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("ironwallet-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// - `IRONWALLET_BACKEND_URL` (default `http://127.0.0.1:8000`)
    /// - `IRONWALLET_CONNECT_TIMEOUT_SECS` (default 5)
    /// - `IRONWALLET_REQUEST_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("IRONWALLET_BACKEND_URL") {
            builder = builder.backend_url(url);
        }

        if let Ok(secs) = std::env::var("IRONWALLET_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ConfigError::Invalid("IRONWALLET_CONNECT_TIMEOUT_SECS"))?;
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        if let Ok(secs) = std::env::var("IRONWALLET_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ConfigError::Invalid("IRONWALLET_REQUEST_TIMEOUT_SECS"))?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Backend base URL, without the API prefix.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Root of the REST API (`<backend>/api`).
    pub fn api_base(&self) -> String {
        format!("{}{API_PREFIX}", self.backend_url)
    }

    /// Full URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.api_base())
    }

    /// TCP connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Whole-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    backend_url: Option<String>,
    connect_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the backend base URL (scheme, host and optional port).
    #[must_use]
    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let defaults = ClientConfig::default();

        let backend_url = self
            .backend_url
            .unwrap_or(defaults.backend_url)
            .trim()
            .trim_end_matches('/')
            .to_string();

        if backend_url.is_empty() {
            return Err(ConfigError::Missing("backend_url"));
        }
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(backend_url));
        }

        let request_timeout = self.request_timeout.unwrap_or(defaults.request_timeout);
        if request_timeout.is_zero() {
            return Err(ConfigError::Invalid("request_timeout"));
        }

        Ok(ClientConfig {
            backend_url,
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            request_timeout,
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration value: {0}")]
    Missing(&'static str),

    #[error("invalid configuration value: {0}")]
    Invalid(&'static str),

    #[error("backend URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
}
