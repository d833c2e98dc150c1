//! Error type for cart mutations.
//!
//! Every mutation either commits fully or returns one of these and leaves the
//! in-memory cart exactly as it was. The store additionally converts each
//! failure into a one-line user-facing notification; see
//! [`crate::store::CartStore`].

use thiserror::Error;

use sugarloaf_core::ProductId;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Errors produced by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product has no line in the cart.
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    /// The requested quantity exceeds available stock.
    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Catalog lookup failed (transport, lookup, or decode).
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading or writing the persisted snapshot failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::NotFound(ProductId::new(4));
        assert_eq!(err.to_string(), "product 4 is not in the cart");

        let err = CartError::StockExceeded {
            product_id: ProductId::new(2),
            requested: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "requested 6 of product 2, only 5 in stock"
        );
    }

    #[test]
    fn test_storage_error_wraps() {
        let err = CartError::from(StorageError::Corrupt("bad snapshot".to_string()));
        assert_eq!(err.to_string(), "storage error: data corruption: bad snapshot");
    }
}
