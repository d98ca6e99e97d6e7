//! Shop Insights dashboard.
//!
//! An app embedded in the Shopify admin that reads the store's orders, draft
//! orders and products through the Admin GraphQL API and shows them as
//! tables and charts. The same data is exposed as JSON under `/api`.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering, Chart.js for drawing
//! - Shopify Admin API with a single static access token
//! - No database, no cache: every request queries Shopify

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;

pub use config::DashboardConfig;
pub use state::AppState;
