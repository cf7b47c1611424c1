//! Proxy configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MINTSOFT_API_KEY` - Mintsoft API key, sent as the `ms-apikey` header
//!
//! ## Optional
//! - `PROXY_HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3001)
//! - `PROXY_ALLOWED_ORIGIN` - Origin allowed to call the proxy from a browser
//!   (default: `http://localhost:3000`)
//! - `MINTSOFT_BASE_URL` - Mintsoft API root (default: `https://api.mintsoft.co.uk`)
//! - `MINTSOFT_TIMEOUT_SECS` - Upstream request timeout (default: none)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_MINTSOFT_BASE_URL: &str = "https://api.mintsoft.co.uk";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "changeme",
    "replace",
    "placeholder",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Proxy application configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Browser origin allowed by CORS
    pub allowed_origin: HeaderValue,
    /// Mintsoft API configuration
    pub mintsoft: MintsoftConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Mintsoft API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct MintsoftConfig {
    /// API root; always ends with `/`
    pub base_url: Url,
    /// API key sent on every request
    pub api_key: SecretString,
    /// Per-request timeout; `None` leaves the transport default
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for MintsoftConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MintsoftConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid, or
    /// if the API key looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ProxyConfig::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&var, "PROXY_HOST", "127.0.0.1")?;
        let port = parse_var(&var, "PORT", "3001")?;

        let origin = var("PROXY_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into());
        let allowed_origin = HeaderValue::from_str(&origin).map_err(|e| {
            ConfigError::InvalidEnvVar("PROXY_ALLOWED_ORIGIN".to_string(), e.to_string())
        })?;

        let mintsoft = MintsoftConfig::from_vars(&var)?;

        Ok(Self {
            host,
            port,
            allowed_origin,
            mintsoft,
            sentry_dsn: var("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: var("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_var(&var, "SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_var(&var, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl MintsoftConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url =
            var("MINTSOFT_BASE_URL").unwrap_or_else(|| DEFAULT_MINTSOFT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("MINTSOFT_BASE_URL".to_string(), e))?;

        let api_key = var("MINTSOFT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("MINTSOFT_API_KEY".to_string()))?;
        let api_key = SecretString::from(api_key);
        validate_api_key(&api_key, "MINTSOFT_API_KEY")?;

        let timeout = var("MINTSOFT_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    ConfigError::InvalidEnvVar("MINTSOFT_TIMEOUT_SECS".to_string(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when unset.
fn parse_var<T>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    var(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse an API root so that relative joins stay under its path.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Reject API keys that are obviously copied from a template.
fn validate_api_key(key: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let lower = key.expose_secret().to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}
