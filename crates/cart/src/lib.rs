//! Sugarloaf Cart - cart state management backed by catalog stock checks.
//!
//! # Architecture
//!
//! - [`ops`] holds the pure mutation rules: each rule takes the current cart
//!   plus the catalog data fetched for it and returns the next cart value.
//! - [`store`] wraps the rules in a stateful facade that fetches from the
//!   catalog, persists a snapshot after every successful mutation, and
//!   reports failures to a notification sink.
//! - [`catalog`], [`storage`], and [`notify`] define the collaborator traits
//!   plus their production implementations, so the core is testable without
//!   any real HTTP endpoint or storage device.
//!
//! # Example
//!
//! ```rust,ignore
//! use sugarloaf_cart::{CartConfig, CartStore, FileStore, HttpCatalogClient, TracingNotifier};
//! use sugarloaf_core::ProductId;
//!
//! let config = CartConfig::from_env()?;
//! let catalog = HttpCatalogClient::new(&config.catalog)?;
//! let storage = FileStore::open(&config.storage_dir)?;
//!
//! let mut store = CartStore::open(catalog, storage, TracingNotifier)?;
//! store.add_product(ProductId::new(1)).await?;
//! store.update_product_amount(ProductId::new(1), 3).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod ops;
pub mod storage;
pub mod store;

pub use catalog::{CatalogError, HttpCatalogClient, ProductCatalog};
pub use config::{CartConfig, CatalogConfig, ConfigError};
pub use error::CartError;
pub use notify::{BufferedNotifier, Notifier, TracingNotifier};
pub use storage::{FileStore, KvStore, MemoryStore, StorageError};
pub use store::{CART_STORAGE_KEY, CartStore};
