//! `GET /api/draftsOrders`: recent draft orders, passed through as Shopify
//! returns them.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, shopify::DraftOrder, state::AppState};

const FAILURE_MESSAGE: &str = "Failed to fetch draft orders";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/draftsOrders", get(list))
}

/// Response body for `GET /api/draftsOrders`.
#[derive(Debug, Serialize)]
pub struct DraftOrdersResponse {
    pub success: bool,
    pub drafts: Vec<DraftOrder>,
}

/// List the first page of draft orders.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<DraftOrdersResponse>, ApiError> {
    let connection = state
        .shopify()
        .get_draft_orders()
        .await
        .map_err(|e| ApiError::new(FAILURE_MESSAGE, e))?;

    Ok(Json(DraftOrdersResponse {
        success: true,
        drafts: connection.draft_orders,
    }))
}
