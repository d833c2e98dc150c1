//! Cart subcommands.

use std::fs;

use rust_decimal::Decimal;
use tracing::info;

use sugarloaf_cart::{
    CART_STORAGE_KEY, CartConfig, CartStore, FileStore, HttpCatalogClient, TracingNotifier,
};
use sugarloaf_core::ProductId;

use super::format_price;

type Store = CartStore<HttpCatalogClient, FileStore, TracingNotifier>;

/// Open the cart store from environment configuration.
fn open_store() -> Result<Store, Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let catalog = HttpCatalogClient::new(&config.catalog)?;
    let storage = FileStore::open(&config.storage_dir)?;
    Ok(CartStore::open(catalog, storage, TracingNotifier)?)
}

/// Show the current cart lines and subtotal.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the snapshot cannot be
/// read.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;

    if store.cart().is_empty() {
        info!("Cart is empty");
        return Ok(());
    }

    let mut subtotal = Decimal::ZERO;
    info!("Cart contents:");
    for item in store.cart() {
        subtotal += item.line_total();
        info!(
            "  [{}] {} - {} x {} = {}",
            item.id,
            item.name,
            item.amount,
            format_price(item.price),
            format_price(item.line_total())
        );
    }
    info!("Subtotal: {}", format_price(subtotal));

    Ok(())
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns an error if the catalog lookup fails, the quantity would exceed
/// stock, or the snapshot cannot be written.
pub async fn add(id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.add_product(id).await?;

    let amount = store
        .cart()
        .iter()
        .find(|item| item.id == id)
        .map_or(0, |item| item.amount);
    info!("Added product {id}; cart now holds {amount}");

    Ok(())
}

/// Remove a product's line from the cart.
///
/// # Errors
///
/// Returns an error if the product is not in the cart or the snapshot cannot
/// be written.
pub fn remove(id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.remove_product(id)?;
    info!("Removed product {id}");
    Ok(())
}

/// Set a product's line to an absolute amount.
///
/// # Errors
///
/// Returns an error if the stock lookup fails, the amount exceeds stock, or
/// the snapshot cannot be written.
pub async fn set_amount(id: ProductId, amount: i64) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.update_product_amount(id, amount).await?;

    match store.cart().iter().find(|item| item.id == id) {
        Some(item) => info!("Product {id} now at {}", item.amount),
        None => info!("Product {id} is not in the cart; nothing changed"),
    }

    Ok(())
}

/// Delete the persisted cart snapshot.
///
/// This is deliberately a storage-level operation rather than a cart
/// mutation: clearing is external to the store API.
///
/// # Errors
///
/// Returns an error if the snapshot file exists but cannot be deleted.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let storage = FileStore::open(&config.storage_dir)?;
    let path = storage.path_for(CART_STORAGE_KEY);

    match fs::remove_file(&path) {
        Ok(()) => info!("Deleted cart snapshot at {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No cart snapshot to delete");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
