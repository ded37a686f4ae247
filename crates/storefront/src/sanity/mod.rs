//! Sanity Content Lake client.
//!
//! # Architecture
//!
//! - GROQ queries over the HTTP query endpoint via `reqwest`
//! - Sanity is the source of truth - NO local sync, direct API calls
//! - In-memory caching via `moka` for product-detail lookups (5 minute TTL);
//!   catalog searches are never cached, every tool invocation queries fresh
//!
//! # Example
//!
//! ```rust,ignore
//! use crystal_harmony_storefront::sanity::SanityClient;
//!
//! let client = SanityClient::new(&config.sanity);
//!
//! // Fetch a product
//! let product = client.product_by_slug("rose-quartz").await?;
//!
//! // Run a filtered catalog search
//! let entries = client.search_products(&filters).await?;
//! ```

mod client;
pub mod image;
mod queries;

pub use client::SanityClient;
pub use image::resolve_image_url;

use thiserror::Error;

/// Errors that can occur when talking to the Content Lake.
#[derive(Debug, Error)]
pub enum SanityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("Sanity API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by the API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Document not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanity_error_display() {
        let err = SanityError::NotFound("product rose-quartz".to_string());
        assert_eq!(err.to_string(), "Not found: product rose-quartz");

        let err = SanityError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Sanity API error (status 401): Unauthorized");
    }

    #[test]
    fn test_rate_limited_display() {
        let err = SanityError::RateLimited(30);
        assert_eq!(err.to_string(), "Rate limited, retry after 30 seconds");
    }
}
