//! The cart value type and its line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// A single cart line: one product and the desired quantity.
///
/// `amount` is always at least 1 - a line that would drop to zero is removed
/// instead of updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    pub amount: i64,
}

impl CartItem {
    /// Create a line for `product` with the given quantity.
    #[must_use]
    pub fn from_product(product: &Product, amount: i64) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            amount,
        }
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

/// The user's current selection of products and desired quantities.
///
/// Lines are unique by product id; insertion order is preserved for display.
/// The serialized form is the plain JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from lines. Callers are responsible for id uniqueness;
    /// use [`Cart::has_unique_ids`] to validate untrusted data.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether a line for `id` exists.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Whether every line has a distinct product id.
    ///
    /// Deserialized snapshots are untrusted; a duplicate id means the stored
    /// data was produced by something other than this store.
    #[must_use]
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.items.iter().all(|item| seen.insert(item.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, amount: i64, price_cents: i64) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::new(price_cents, 2),
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            amount,
        }
    }

    #[test]
    fn test_from_product_copies_details() {
        let product = Product {
            id: ProductId::new(9),
            name: "Canvas Tote".to_string(),
            price: Decimal::new(2450, 2),
            image_url: "https://cdn.example.com/tote.jpg".to_string(),
        };

        let line = CartItem::from_product(&product, 2);
        assert_eq!(line.id, product.id);
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.amount, 2);
    }

    #[test]
    fn test_totals() {
        let cart = Cart::from_items(vec![item(1, 2, 1000), item(2, 1, 550)]);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Decimal::new(2550, 2));
    }

    #[test]
    fn test_lookup() {
        let cart = Cart::from_items(vec![item(1, 1, 100), item(2, 4, 200)]);
        assert!(cart.contains(ProductId::new(2)));
        assert!(!cart.contains(ProductId::new(3)));
        assert_eq!(cart.get(ProductId::new(2)).map(|i| i.amount), Some(4));
    }

    #[test]
    fn test_has_unique_ids() {
        let unique = Cart::from_items(vec![item(1, 1, 100), item(2, 1, 100)]);
        assert!(unique.has_unique_ids());

        let duplicated = Cart::from_items(vec![item(1, 1, 100), item(1, 2, 100)]);
        assert!(!duplicated.has_unique_ids());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let cart = Cart::from_items(vec![item(1, 2, 1999), item(5, 1, 450)]);
        let json = serde_json::to_string(&cart).expect("serialize cart");

        // Transparent: the snapshot is the plain array of lines.
        assert!(json.starts_with('['));

        let back: Cart = serde_json::from_str(&json).expect("deserialize cart");
        assert_eq!(back, cart);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }
}
