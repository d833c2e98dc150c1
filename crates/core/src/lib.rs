//! Sugarloaf Core - Shared types library.
//!
//! This crate provides the domain types used across all Sugarloaf components:
//! - `cart` - Cart state management library
//! - `cli` - Command-line tools for driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, catalog read models, and the cart value type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
