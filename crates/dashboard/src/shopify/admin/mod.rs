//! Shopify Admin API GraphQL client.
//!
//! This module provides a client for the three read-only queries the
//! dashboard needs. Authentication is a pre-issued Admin API access token.

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::ShopifyAdminConfig;

use super::{
    AdminShopifyError, GraphQLError,
    types::{DraftOrderConnection, OrderConnection, ProductConnection},
};

mod conversions;
pub mod queries;

use conversions::{
    convert_draft_order_connection, convert_order_connection, convert_product_connection,
};
use queries::{GetDraftOrders, GetOrders, GetProducts};

/// Orders fetched per request. There is no pagination.
pub const ORDERS_PAGE_SIZE: i64 = 60;
/// Line items fetched per order.
pub const ORDER_LINE_ITEMS_PAGE_SIZE: i64 = 60;
/// Draft orders fetched per request.
pub const DRAFT_ORDERS_PAGE_SIZE: i64 = 50;
/// Products fetched per request.
pub const PRODUCTS_PAGE_SIZE: i64 = 100;
/// Variants fetched per product. Inventory of later variants is not counted.
pub const PRODUCT_VARIANTS_PAGE_SIZE: i64 = 100;

/// Fallback when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 2;

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: Url,
    access_token: SecretString,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ShopifyAdminConfig) -> Result<Self, AdminShopifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                endpoint: config.endpoint.clone(),
                access_token: config.access_token.clone(),
            }),
        })
    }

    /// The GraphQL endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL query.
    // Retry-After is a small non-negative float (e.g. "2.0")
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, AdminShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header("X-Shopify-Access-Token", self.inner.access_token.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<f64>().ok())
                .map_or(DEFAULT_RETRY_AFTER_SECS, |secs| secs.ceil().max(0.0) as u64);
            return Err(AdminShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AdminShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        if !status.is_success() {
            return Err(AdminShopifyError::UnexpectedStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let graphql_response: graphql_client::Response<Q::ResponseData> =
            serde_json::from_slice(&bytes)?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            return Err(AdminShopifyError::GraphQL(
                errors.into_iter().map(GraphQLError::from).collect(),
            ));
        }

        graphql_response.data.ok_or(AdminShopifyError::MissingData)
    }

    // =========================================================================
    // Dashboard queries
    // =========================================================================

    /// Get the first page of orders with their line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, returns an error response,
    /// or contains a malformed money amount.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<OrderConnection, AdminShopifyError> {
        let variables = queries::get_orders::Variables {
            first: ORDERS_PAGE_SIZE,
            line_items_first: ORDER_LINE_ITEMS_PAGE_SIZE,
        };

        let response = self.execute::<GetOrders>(variables).await?;
        let connection = convert_order_connection(response)?;

        if connection.has_next_page {
            tracing::debug!(
                fetched = connection.orders.len(),
                "More orders exist beyond the first page"
            );
        }

        Ok(connection)
    }

    /// Get the first page of draft orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_draft_orders(&self) -> Result<DraftOrderConnection, AdminShopifyError> {
        let variables = queries::get_draft_orders::Variables {
            first: DRAFT_ORDERS_PAGE_SIZE,
        };

        let response = self.execute::<GetDraftOrders>(variables).await?;
        let connection = convert_draft_order_connection(response);

        if connection.has_next_page {
            tracing::debug!(
                fetched = connection.draft_orders.len(),
                "More draft orders exist beyond the first page"
            );
        }

        Ok(connection)
    }

    /// Get the first page of products with their variants' inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<ProductConnection, AdminShopifyError> {
        let variables = queries::get_products::Variables {
            first: PRODUCTS_PAGE_SIZE,
            variants_first: PRODUCT_VARIANTS_PAGE_SIZE,
        };

        let response = self.execute::<GetProducts>(variables).await?;
        let connection = convert_product_connection(response);

        if connection.has_next_page {
            tracing::warn!(
                fetched = connection.products.len(),
                "More products exist beyond the first page; list is partial"
            );
        }

        for product in connection.products.iter().filter(|p| p.variants_truncated) {
            tracing::warn!(
                product_id = %product.id,
                counted_variants = product.variants.len(),
                "Product has more variants than fetched; total quantity is partial"
            );
        }

        Ok(connection)
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
