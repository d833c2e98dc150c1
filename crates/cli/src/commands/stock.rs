//! Catalog inspection subcommands.

use tracing::info;

use sugarloaf_cart::{CartConfig, HttpCatalogClient, ProductCatalog};
use sugarloaf_core::ProductId;

use super::format_price;

fn open_catalog() -> Result<HttpCatalogClient, Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    Ok(HttpCatalogClient::new(&config.catalog)?)
}

/// List stock for every product in the catalog.
///
/// # Errors
///
/// Returns an error if the catalog request fails.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog()?;
    let entries = catalog.get_all_stock().await?;

    if entries.is_empty() {
        info!("No stock entries");
        return Ok(());
    }

    info!("Stock levels:");
    for entry in entries {
        info!("  product {}: {}", entry.id, entry.amount);
    }

    Ok(())
}

/// Show the stock level for one product.
///
/// # Errors
///
/// Returns an error if the catalog request fails or the id is unknown.
pub async fn get(id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog()?;
    let entry = catalog.get_stock(id).await?;
    info!("product {}: {} in stock", entry.id, entry.amount);
    Ok(())
}

/// Show catalog details for one product.
///
/// # Errors
///
/// Returns an error if the catalog request fails or the id is unknown.
pub async fn product(id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog()?;
    let product = catalog.get_product(id).await?;

    info!("Product {}", product.id);
    info!("  name:  {}", product.name);
    info!("  price: {}", format_price(product.price));
    info!("  image: {}", product.image_url);

    Ok(())
}
