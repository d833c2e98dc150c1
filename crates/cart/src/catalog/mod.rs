//! Product catalog access.
//!
//! # Architecture
//!
//! - The catalog service is the source of truth for products and stock -
//!   no local sync, direct API calls.
//! - Product lookups are cached in memory via `moka` (short TTL); stock reads
//!   are never cached, because every cart mutation revalidates against a
//!   fresh stock read.
//! - Failures are surfaced once to the caller; there is no retry.

mod http;

pub use http::HttpCatalogClient;

use thiserror::Error;

use sugarloaf_core::{Product, ProductId, StockEntry};

/// Read access to the product catalog and its stock levels.
///
/// Both collaborator shapes named by the cart operations are provided: the
/// per-id stock read used by mutations, and the fetch-everything read for
/// callers that filter client-side.
#[allow(async_fn_in_trait)]
pub trait ProductCatalog {
    /// Fetch the details of one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the request fails.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch the current stock level of one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or the request fails.
    async fn get_stock(&self, id: ProductId) -> Result<StockEntry, CatalogError>;

    /// Fetch the current stock level of every product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn get_all_stock(&self) -> Result<Vec<StockEntry>, CatalogError>;
}

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog returned a non-success status.
    #[error("catalog returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// A request URL could not be built from the configured base URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("products/123".to_string());
        assert_eq!(err.to_string(), "not found: products/123");

        let err = CatalogError::RateLimited(30);
        assert_eq!(err.to_string(), "rate limited, retry after 30 seconds");
    }

    #[test]
    fn test_api_error_display() {
        let err = CatalogError::Api {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "catalog returned 500 Internal Server Error: boom"
        );
    }
}
