//! Integration test support for Sugarloaf.
//!
//! Hosts an in-process catalog service speaking the same JSON surface as a
//! production catalog (`products/{id}`, `stock/{id}`, `stock`), so the HTTP
//! client and the cart store can be exercised end to end without any external
//! service.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use secrecy::SecretString;
use url::Url;

use sugarloaf_cart::CatalogConfig;
use sugarloaf_core::{Product, ProductId, StockEntry};

/// An in-process catalog service with adjustable products, stock, and
/// failure behavior.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    inner: Arc<Mutex<FakeCatalogInner>>,
}

#[derive(Default)]
struct FakeCatalogInner {
    products: HashMap<i32, Product>,
    stock: HashMap<i32, i64>,
    failing: bool,
    required_token: Option<String>,
}

impl FakeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a product with its stock level.
    pub fn insert(&self, product: Product, stock: i64) {
        let mut inner = self.inner.lock().expect("catalog lock");
        inner.stock.insert(product.id.as_i32(), stock);
        inner.products.insert(product.id.as_i32(), product);
    }

    /// Adjust the stock level for a product id.
    pub fn set_stock(&self, id: ProductId, stock: i64) {
        let mut inner = self.inner.lock().expect("catalog lock");
        inner.stock.insert(id.as_i32(), stock);
    }

    /// Make every endpoint return 500 until re-enabled.
    pub fn set_failing(&self, failing: bool) {
        let mut inner = self.inner.lock().expect("catalog lock");
        inner.failing = failing;
    }

    /// Require a bearer token on every request.
    pub fn require_token(&self, token: &str) {
        let mut inner = self.inner.lock().expect("catalog lock");
        inner.required_token = Some(token.to_string());
    }

    /// Serve the catalog on an ephemeral local port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn serve(&self) -> SocketAddr {
        let app = Router::new()
            .route("/products/{id}", get(get_product))
            .route("/stock", get(get_all_stock))
            .route("/stock/{id}", get(get_stock))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake catalog");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake catalog");
        });

        addr
    }
}

/// Status to return before looking at the request, if any.
fn deny(inner: &FakeCatalogInner, headers: &HeaderMap) -> Option<StatusCode> {
    if inner.failing {
        return Some(StatusCode::INTERNAL_SERVER_ERROR);
    }

    if let Some(token) = &inner.required_token {
        let expected = format!("Bearer {token}");
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value == expected);
        if !authorized {
            return Some(StatusCode::UNAUTHORIZED);
        }
    }

    None
}

async fn get_product(
    State(catalog): State<FakeCatalog>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Response {
    let inner = catalog.inner.lock().expect("catalog lock");
    if let Some(status) = deny(&inner, &headers) {
        return status.into_response();
    }

    match inner.products.get(&id) {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_stock(
    State(catalog): State<FakeCatalog>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Response {
    let inner = catalog.inner.lock().expect("catalog lock");
    if let Some(status) = deny(&inner, &headers) {
        return status.into_response();
    }

    match inner.stock.get(&id) {
        Some(&amount) => Json(StockEntry {
            id: ProductId::new(id),
            amount,
        })
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_all_stock(State(catalog): State<FakeCatalog>, headers: HeaderMap) -> Response {
    let inner = catalog.inner.lock().expect("catalog lock");
    if let Some(status) = deny(&inner, &headers) {
        return status.into_response();
    }

    let mut entries: Vec<_> = inner
        .stock
        .iter()
        .map(|(&id, &amount)| StockEntry {
            id: ProductId::new(id),
            amount,
        })
        .collect();
    entries.sort_by_key(|entry| entry.id);
    Json(entries).into_response()
}

/// Catalog client configuration pointing at a served [`FakeCatalog`].
#[must_use]
pub fn catalog_config(addr: SocketAddr) -> CatalogConfig {
    CatalogConfig {
        base_url: Url::parse(&format!("http://{addr}/")).expect("parse base url"),
        api_token: None,
        timeout: Duration::from_secs(5),
    }
}

/// Like [`catalog_config`], with a bearer token.
#[must_use]
pub fn catalog_config_with_token(addr: SocketAddr, token: &str) -> CatalogConfig {
    CatalogConfig {
        api_token: Some(SecretString::from(token.to_string())),
        ..catalog_config(addr)
    }
}

/// Build a product fixture with a price in cents.
#[must_use]
pub fn product(id: i32, name: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        image_url: format!("https://cdn.example.com/{id}.jpg"),
    }
}
