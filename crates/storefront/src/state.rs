//! Application state shared across handlers.

use std::sync::Arc;

use crate::agent::{ClaudeClient, ToolContext};
use crate::config::StorefrontConfig;
use crate::sanity::SanityClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the content-store client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    sanity: SanityClient,
    claude: ClaudeClient,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let sanity = SanityClient::new(&config.sanity);
        let claude = ClaudeClient::new(&config.claude);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                sanity,
                claude,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the Content Lake client.
    #[must_use]
    pub fn sanity(&self) -> &SanityClient {
        &self.inner.sanity
    }

    /// Get a reference to the Messages API client.
    #[must_use]
    pub fn claude(&self) -> &ClaudeClient {
        &self.inner.claude
    }

    /// Ambient context for the search pipeline.
    #[must_use]
    pub fn tool_context(&self) -> ToolContext {
        ToolContext {
            low_stock_threshold: self.inner.config.low_stock_threshold,
            project_id: self.inner.config.sanity.project_id.clone(),
            dataset: self.inner.config.sanity.dataset.clone(),
        }
    }
}
