//! HVRDCR Market storefront library.
//!
//! Everything the `hvrdcr` binary needs to run the storefront locally:
//! the Google Sheets catalog client and row adapter, per-category filters,
//! the persisted cart and identity stores, and the EmailJS checkout flow.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod services;
pub mod sheets;
pub mod state;
pub mod storage;
pub mod stores;
