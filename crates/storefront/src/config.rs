//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SANITY_PROJECT_ID` - Sanity project identifier
//! - `SANITY_API_TOKEN` - Sanity read token for the Content Lake API
//! - `ANTHROPIC_API_KEY` - API key for the shopping assistant
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SANITY_DATASET` - Dataset name (default: production)
//! - `SANITY_API_VERSION` - Content Lake API version (default: 2025-12-05)
//! - `SANITY_USE_CDN` - Query the CDN edge instead of the live API (default: false)
//! - `CLAUDE_MODEL` - Assistant model (default: claude-sonnet-4-5)
//! - `LOW_STOCK_THRESHOLD` - Stock count at or below which an entry is
//!   reported as low stock (default: 5)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Stock count at or below which an entry reports as low stock
    pub low_stock_threshold: i64,
    /// Sanity Content Lake configuration
    pub sanity: SanityConfig,
    /// Shopping assistant model configuration
    pub claude: ClaudeConfig,
}

/// Sanity Content Lake configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct SanityConfig {
    /// Sanity project identifier (e.g., lemt5f0y)
    pub project_id: String,
    /// Dataset name (e.g., production)
    pub dataset: String,
    /// Content Lake API version date (e.g., 2025-12-05)
    pub api_version: String,
    /// Read token for authenticated queries
    pub api_token: SecretString,
    /// Query the CDN edge instead of the live API
    pub use_cdn: bool,
}

impl std::fmt::Debug for SanityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanityConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("api_token", &"[REDACTED]")
            .field("use_cdn", &self.use_cdn)
            .finish()
    }
}

/// Shopping assistant model configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ClaudeConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model identifier
    pub model: String,
}

impl std::fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;
        let low_stock_threshold = get_env_or_default("LOW_STOCK_THRESHOLD", "5")
            .parse::<i64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LOW_STOCK_THRESHOLD".to_string(), e.to_string())
            })?;

        let sanity = SanityConfig::from_env()?;
        let claude = ClaudeConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            low_stock_threshold,
            sanity,
            claude,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SanityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let use_cdn = get_env_or_default("SANITY_USE_CDN", "false")
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar("SANITY_USE_CDN".to_string(), e.to_string()))?;

        Ok(Self {
            project_id: get_required_env("SANITY_PROJECT_ID")?,
            dataset: get_env_or_default("SANITY_DATASET", "production"),
            api_version: get_env_or_default("SANITY_API_VERSION", "2025-12-05"),
            api_token: get_required_secret("SANITY_API_TOKEN")?,
            use_cdn,
        })
    }

    /// Hostname of the query endpoint; the CDN edge serves cached reads.
    #[must_use]
    pub fn api_host(&self) -> String {
        if self.use_cdn {
            format!("{}.apicdn.sanity.io", self.project_id)
        } else {
            format!("{}.api.sanity.io", self.project_id)
        }
    }
}

impl ClaudeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: get_required_secret("ANTHROPIC_API_KEY")?,
            model: get_env_or_default("CLAUDE_MODEL", "claude-sonnet-4-5"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
