//! The cart store: current cart value plus its collaborators.
//!
//! Mutations follow a commit-or-abort protocol: the next cart value is
//! computed by the pure rules in [`crate::ops`], persisted, and only then
//! swapped in. Any failure - lookup, stock validation, or persistence -
//! leaves the in-memory cart exactly as it was, emits a one-line user-facing
//! notification, and returns the typed error to the caller.

use tracing::instrument;

use sugarloaf_core::{Cart, CartItem, ProductId};

use crate::catalog::ProductCatalog;
use crate::error::CartError;
use crate::notify::Notifier;
use crate::ops;
use crate::storage::{KvStore, StorageError};

/// Storage key for the serialized cart snapshot.
pub const CART_STORAGE_KEY: &str = "sugarloaf:cart";

const MSG_OUT_OF_STOCK: &str = "requested quantity out of stock";
const MSG_ADD_FAILED: &str = "error adding product";
const MSG_REMOVE_FAILED: &str = "error removing product";
const MSG_UPDATE_FAILED: &str = "error changing product quantity";

/// Cart state and mutation API.
///
/// Holds the current [`Cart`] value and guarantees it never violates stock
/// limits. Mutations take `&mut self`, so overlapping operations against one
/// store value are unrepresentable; the catalog is re-read on every mutation
/// and the full snapshot is rewritten after every successful one.
pub struct CartStore<C, S, N> {
    catalog: C,
    storage: S,
    notifier: N,
    cart: Cart,
}

impl<C, S, N> CartStore<C, S, N>
where
    C: ProductCatalog,
    S: KvStore,
    N: Notifier,
{
    /// Open the store, loading the persisted snapshot if one exists.
    ///
    /// An absent snapshot yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the snapshot cannot be read, fails
    /// to parse, or contains duplicate product ids.
    pub fn open(catalog: C, storage: S, notifier: N) -> Result<Self, CartError> {
        let cart = load_snapshot(&storage)?;
        Ok(Self {
            catalog,
            storage,
            notifier,
            cart,
        })
    }

    /// Read-only snapshot of the current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Add one unit of a product to the cart.
    ///
    /// Fetches the product's details and current stock. A line already in
    /// the cart is incremented by one, guarded against stock; a new line is
    /// appended with amount 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the increment would surpass
    /// available stock, or the underlying catalog/storage error. The cart is
    /// unchanged on any failure.
    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_add(product_id).await;
        self.report(result, MSG_ADD_FAILED)
    }

    async fn try_add(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let product = self.catalog.get_product(product_id).await?;
        let stock = self.catalog.get_stock(product_id).await?;
        let next = ops::add(&self.cart, &product, &stock)?;
        self.commit(next)
    }

    /// Remove a product's line from the cart.
    ///
    /// No catalog round-trip: removal needs no stock check.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] when the product has no line, or the
    /// underlying storage error. The cart is unchanged on any failure.
    #[instrument(skip(self))]
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let next = ops::remove(&self.cart, product_id);
        let result = next.and_then(|cart| self.commit(cart));
        self.report(result, MSG_REMOVE_FAILED)
    }

    /// Set a product's line to an absolute amount.
    ///
    /// Fetches current stock first. A non-positive `amount` or an id with no
    /// matching line is silently ignored (no mutation, no notification);
    /// dropping a line is [`CartStore::remove_product`]'s job.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when `amount` surpasses available
    /// stock, or the underlying catalog/storage error. The cart is unchanged
    /// on any failure.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        let result = self.try_update(product_id, amount).await;
        self.report(result, MSG_UPDATE_FAILED)
    }

    async fn try_update(&mut self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        let stock = self.catalog.get_stock(product_id).await?;
        match ops::set_amount(&self.cart, product_id, amount, &stock)? {
            Some(next) => self.commit(next),
            None => Ok(()),
        }
    }

    /// Persist `next` and only then replace the in-memory cart, so a failed
    /// save leaves prior state intact.
    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        save_snapshot(&self.storage, &next)?;
        self.cart = next;
        Ok(())
    }

    /// Emit the user-facing notification for a failed mutation.
    fn report(&self, result: Result<(), CartError>, fallback: &str) -> Result<(), CartError> {
        if let Err(err) = &result {
            let message = match err {
                CartError::StockExceeded { .. } => MSG_OUT_OF_STOCK,
                _ => fallback,
            };
            self.notifier.error(message);
        }
        result
    }
}

fn load_snapshot<S: KvStore>(storage: &S) -> Result<Cart, CartError> {
    let Some(raw) = storage.load(CART_STORAGE_KEY)? else {
        return Ok(Cart::new());
    };

    let cart: Cart = serde_json::from_str(&raw)
        .map_err(|e| StorageError::Corrupt(format!("invalid cart snapshot: {e}")))?;

    if !cart.has_unique_ids() {
        return Err(
            StorageError::Corrupt("duplicate product ids in cart snapshot".to_string()).into(),
        );
    }

    Ok(cart)
}

fn save_snapshot<S: KvStore>(storage: &S, cart: &Cart) -> Result<(), CartError> {
    let raw = serde_json::to_string(cart)
        .map_err(|e| StorageError::Corrupt(format!("cart snapshot failed to serialize: {e}")))?;
    storage.save(CART_STORAGE_KEY, &raw)?;
    Ok(())
}
