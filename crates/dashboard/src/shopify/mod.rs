//! Shopify Admin API client.
//!
//! # Security
//!
//! This module holds the Shopify Admin API access token handed to the app by
//! the hosting platform. The token is never logged and never sent anywhere
//! except the configured GraphQL endpoint.
//!
//! # Architecture
//!
//! - Fixed GraphQL documents, one per dashboard data source
//! - `graphql_client` request/response envelopes over `reqwest`
//! - Direct API calls per request: no local sync, no caching, no pagination
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_insights_dashboard::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! let orders = client.get_orders().await?;
//! let products = client.get_products().await?;
//! ```

mod admin;
pub mod types;

pub use admin::{
    AdminClient, DRAFT_ORDERS_PAGE_SIZE, ORDER_LINE_ITEMS_PAGE_SIZE, ORDERS_PAGE_SIZE,
    PRODUCT_VARIANTS_PAGE_SIZE, PRODUCTS_PAGE_SIZE,
};
pub use types::*;

use shop_insights_core::PriceError;
use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status.
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// The response carried neither data nor errors.
    #[error("No data in response")]
    MissingData,

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A money amount in the response was not a decimal.
    #[error("Invalid money amount: {0}")]
    InvalidMoney(#[from] PriceError),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i32,
    /// Column number (1-indexed).
    pub column: i32,
}

impl From<graphql_client::Error> for GraphQLError {
    fn from(error: graphql_client::Error) -> Self {
        Self {
            message: error.message,
            locations: error
                .locations
                .unwrap_or_default()
                .into_iter()
                .map(|l| GraphQLErrorLocation {
                    line: l.line,
                    column: l.column,
                })
                .collect(),
        }
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
