use std::{env, num::ParseIntError, time::Duration};
use url::Url;

/// Environment variable holding the backend base URL.
pub const BACKEND_ENDPOINT: &str = "BACKEND_ENDPOINT";

/// Environment variable holding an optional request timeout in seconds.
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

/// Client configuration shared by the backend transports.
///
/// The value is built once at startup and handed to each transport at
/// construction. Transports never read the environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL every backend path is resolved against.
    pub backend_endpoint: Url,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Creates a config for `backend_endpoint` without a timeout.
    #[must_use]
    pub fn new(backend_endpoint: Url) -> Self {
        Self {
            backend_endpoint,
            timeout: None,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the endpoint in a form usable as a base for relative joins.
    ///
    /// Without a trailing slash `Url::join` would replace the last path
    /// segment instead of appending to it.
    #[must_use]
    pub fn base_url(&self) -> Url {
        let mut url = self.backend_endpoint.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    /// Load the client configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_ENDPOINT` is missing or not a URL,
    /// or if `HTTP_TIMEOUT_SECS` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the client configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(BACKEND_ENDPOINT)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(BACKEND_ENDPOINT))?;
        let backend_endpoint = Url::parse(&endpoint)?;

        let timeout = match lookup(HTTP_TIMEOUT_SECS).filter(|value| !value.is_empty()) {
            Some(secs) => Some(Duration::from_secs(secs.parse::<u64>()?)),
            None => None,
        };

        Ok(Self {
            backend_endpoint,
            timeout,
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid backend endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
}
