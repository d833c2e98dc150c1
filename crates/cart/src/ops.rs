//! Pure cart mutation rules.
//!
//! Each rule takes the current cart plus the catalog data fetched for the
//! mutation and returns the next cart value, or an error that leaves the
//! input untouched. Nothing here performs I/O; the [`crate::store`] facade
//! supplies fetched data and handles persistence.

use sugarloaf_core::{Cart, CartItem, Product, ProductId, StockEntry};

use crate::error::CartError;

/// Add one unit of `product` to the cart.
///
/// A line already in the cart is incremented by one, guarded against
/// `stock`. A product with no line yet is appended with amount 1; only the
/// increment is stock-checked, the append path is not.
///
/// # Errors
///
/// Returns [`CartError::StockExceeded`] when the incremented amount would
/// surpass `stock.amount`.
pub fn add(cart: &Cart, product: &Product, stock: &StockEntry) -> Result<Cart, CartError> {
    let mut items = cart.items().to_vec();

    match items.iter_mut().find(|item| item.id == product.id) {
        Some(item) => {
            let requested = item.amount + 1;
            if requested > stock.amount {
                return Err(CartError::StockExceeded {
                    product_id: product.id,
                    requested,
                    available: stock.amount,
                });
            }
            item.amount = requested;
        }
        None => items.push(CartItem::from_product(product, 1)),
    }

    Ok(Cart::from_items(items))
}

/// Remove the line for `id`, leaving every other line untouched.
///
/// # Errors
///
/// Returns [`CartError::NotFound`] when the cart has no line for `id`.
pub fn remove(cart: &Cart, id: ProductId) -> Result<Cart, CartError> {
    if !cart.contains(id) {
        return Err(CartError::NotFound(id));
    }

    let items = cart
        .items()
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect();
    Ok(Cart::from_items(items))
}

/// Set the line for `id` to exactly `amount` (absolute, not a delta).
///
/// Returns `Ok(None)` when the request is a no-op: a non-positive amount
/// (dropping to zero is the remove operation's job, not an update) or an id
/// with no matching line. Lines not matching `id` always pass through
/// unchanged.
///
/// # Errors
///
/// Returns [`CartError::StockExceeded`] when `amount` surpasses
/// `stock.amount`.
pub fn set_amount(
    cart: &Cart,
    id: ProductId,
    amount: i64,
    stock: &StockEntry,
) -> Result<Option<Cart>, CartError> {
    if amount <= 0 || !cart.contains(id) {
        return Ok(None);
    }

    if amount > stock.amount {
        return Err(CartError::StockExceeded {
            product_id: id,
            requested: amount,
            available: stock.amount,
        });
    }

    let items = cart
        .items()
        .iter()
        .map(|item| {
            if item.id == id {
                CartItem {
                    amount,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect();
    Ok(Some(Cart::from_items(items)))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::new(999, 2),
            image_url: format!("https://cdn.example.com/{id}.jpg"),
        }
    }

    fn stock(id: i32, amount: i64) -> StockEntry {
        StockEntry {
            id: ProductId::new(id),
            amount,
        }
    }

    fn cart_with(entries: &[(i32, i64)]) -> Cart {
        Cart::from_items(
            entries
                .iter()
                .map(|&(id, amount)| CartItem::from_product(&product(id), amount))
                .collect(),
        )
    }

    #[test]
    fn test_add_appends_new_line_with_amount_one() {
        let cart = cart_with(&[]);
        let next = add(&cart, &product(1), &stock(1, 5)).expect("add");

        assert_eq!(next.len(), 1);
        assert_eq!(next.get(ProductId::new(1)).map(|i| i.amount), Some(1));
    }

    #[test]
    fn test_add_appends_even_when_stock_is_zero() {
        // Only the increment path is stock-guarded; appends are not.
        let cart = cart_with(&[]);
        let next = add(&cart, &product(1), &stock(1, 0)).expect("add");

        assert_eq!(next.get(ProductId::new(1)).map(|i| i.amount), Some(1));
    }

    #[test]
    fn test_add_increments_existing_line() {
        let cart = cart_with(&[(1, 2), (2, 1)]);
        let next = add(&cart, &product(1), &stock(1, 5)).expect("add");

        assert_eq!(next.get(ProductId::new(1)).map(|i| i.amount), Some(3));
        assert_eq!(next.get(ProductId::new(2)).map(|i| i.amount), Some(1));
    }

    #[test]
    fn test_add_at_stock_limit_is_rejected() {
        let cart = cart_with(&[(1, 5)]);
        let err = add(&cart, &product(1), &stock(1, 5)).expect_err("must reject");

        assert!(matches!(
            err,
            CartError::StockExceeded {
                requested: 6,
                available: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_remove_drops_only_the_matching_line() {
        let cart = cart_with(&[(1, 2), (2, 3), (3, 1)]);
        let next = remove(&cart, ProductId::new(2)).expect("remove");

        assert_eq!(next.len(), 2);
        assert!(!next.contains(ProductId::new(2)));
        assert_eq!(next.get(ProductId::new(1)).map(|i| i.amount), Some(2));
        assert_eq!(next.get(ProductId::new(3)).map(|i| i.amount), Some(1));
    }

    #[test]
    fn test_remove_absent_id_is_not_found() {
        let cart = cart_with(&[(1, 2)]);
        let err = remove(&cart, ProductId::new(9)).expect_err("must reject");
        assert!(matches!(err, CartError::NotFound(id) if id == ProductId::new(9)));
    }

    #[test]
    fn test_set_amount_zero_or_negative_is_noop() {
        let cart = cart_with(&[(1, 4)]);
        for amount in [0, -1, -100] {
            let outcome =
                set_amount(&cart, ProductId::new(1), amount, &stock(1, 5)).expect("set_amount");
            assert!(outcome.is_none(), "amount {amount} must be a no-op");
        }
    }

    #[test]
    fn test_set_amount_absent_id_is_noop() {
        let cart = cart_with(&[(1, 4)]);
        let outcome = set_amount(&cart, ProductId::new(9), 2, &stock(9, 5)).expect("set_amount");
        assert!(outcome.is_none());
    }

    #[test]
    fn test_set_amount_is_absolute_not_additive() {
        let cart = cart_with(&[(1, 4), (2, 1)]);
        let next = set_amount(&cart, ProductId::new(1), 2, &stock(1, 5))
            .expect("set_amount")
            .expect("must mutate");

        assert_eq!(next.get(ProductId::new(1)).map(|i| i.amount), Some(2));
        assert_eq!(next.get(ProductId::new(2)).map(|i| i.amount), Some(1));
    }

    #[test]
    fn test_set_amount_up_to_stock_is_allowed() {
        let cart = cart_with(&[(1, 1)]);
        let next = set_amount(&cart, ProductId::new(1), 5, &stock(1, 5))
            .expect("set_amount")
            .expect("must mutate");
        assert_eq!(next.get(ProductId::new(1)).map(|i| i.amount), Some(5));
    }

    #[test]
    fn test_set_amount_beyond_stock_is_rejected() {
        let cart = cart_with(&[(1, 2)]);
        let err =
            set_amount(&cart, ProductId::new(1), 10, &stock(1, 5)).expect_err("must reject");

        assert!(matches!(
            err,
            CartError::StockExceeded {
                requested: 10,
                available: 5,
                ..
            }
        ));
    }
}
