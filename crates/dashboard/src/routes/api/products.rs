//! `GET /api/product`: products with inventory summed across variants.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, shopify::Product, state::AppState};

const FAILURE_MESSAGE: &str = "Failed to fetch products";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/product", get(list))
}

/// Response body for `GET /api/product`.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub count: usize,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub total_quantity: i64,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            total_quantity: product.total_quantity(),
        }
    }
}

/// List the first page of products with summed inventory.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<ProductsResponse>, ApiError> {
    let connection = state
        .shopify()
        .get_products()
        .await
        .map_err(|e| ApiError::new(FAILURE_MESSAGE, e))?;

    let products: Vec<ProductSummary> =
        connection.products.iter().map(ProductSummary::from).collect();

    Ok(Json(ProductsResponse {
        success: true,
        count: products.len(),
        products,
    }))
}
