//! Catalog read models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product as served by the catalog service.
///
/// Prices use [`Decimal`] and serialize as strings (lossless round-trip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
}

/// Available stock for a product id.
///
/// The catalog is the source of truth for availability; `amount` is the
/// maximum quantity a cart line may hold at the time it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: ProductId,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price_serializes_as_string() {
        let product = Product {
            id: ProductId::new(1),
            name: "Pineapple Slicer".to_string(),
            price: Decimal::new(1999, 2),
            image_url: "https://cdn.example.com/slicer.jpg".to_string(),
        };

        let json = serde_json::to_string(&product).expect("serialize product");
        assert!(json.contains("\"price\":\"19.99\""));

        let back: Product = serde_json::from_str(&json).expect("deserialize product");
        assert_eq!(back, product);
    }

    #[test]
    fn test_stock_entry_round_trip() {
        let entry = StockEntry {
            id: ProductId::new(3),
            amount: 12,
        };
        let json = serde_json::to_string(&entry).expect("serialize stock");
        let back: StockEntry = serde_json::from_str(&json).expect("deserialize stock");
        assert_eq!(back, entry);
    }
}
