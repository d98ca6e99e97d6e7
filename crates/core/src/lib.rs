//! Shop Insights Core - Shared types and aggregation.
//!
//! This crate provides the domain types used by the `dashboard` crate and the
//! small folds that turn Shopify Admin API results into chart and table data:
//! - per-order total quantity and formatted total price
//! - per-product total inventory
//! - order counts and order value bucketed by payment status
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here operates on already-fetched, bounded lists.
//!
//! # Modules
//!
//! - [`types`] - Prices, payment statuses and Shopify ID helpers
//! - [`aggregate`] - Quantity sums and status bucketing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod types;

pub use aggregate::{StatusBuckets, total_quantity};
pub use types::*;
