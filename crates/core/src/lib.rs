//! HVRDCR Market Core - Shared domain types.
//!
//! This crate provides the common types used across all HVRDCR Market
//! components:
//! - `storefront` - Catalog, stores, and checkout library
//! - `cli` - The `hvrdcr` command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product catalog types, the cart value type, prices, emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
