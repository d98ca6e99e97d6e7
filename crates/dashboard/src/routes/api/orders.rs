//! `GET /api/order`: recent orders with per-order quantity and total.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use shop_insights_core::Price;
use tracing::instrument;

use crate::{
    error::ApiError,
    shopify::{Order, OrderLineItem},
    state::AppState,
};

const FAILURE_MESSAGE: &str = "Failed to fetch orders";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/order", get(list))
}

/// Response body for `GET /api/order`.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderSummary>,
}

/// One order as returned to the embedded front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: String,
    pub name: String,
    pub payment_status: String,
    pub total_quantity: i64,
    /// `"<CURRENCY> <amount>"` with two decimals.
    pub total_price: String,
    pub line_items: Vec<LineItemSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemSummary {
    pub title: String,
    pub quantity: i64,
    /// Formatted like `totalPrice`; null when Shopify omits the price.
    pub unit_price: Option<String>,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            name: order.name.clone(),
            payment_status: order.payment_status.as_str().to_string(),
            total_quantity: order.total_quantity(),
            total_price: order.total_price.display(),
            line_items: order.line_items.iter().map(LineItemSummary::from).collect(),
        }
    }
}

impl From<&OrderLineItem> for LineItemSummary {
    fn from(item: &OrderLineItem) -> Self {
        Self {
            title: item.title.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.as_ref().map(Price::display),
        }
    }
}

/// List the first page of orders.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<OrdersResponse>, ApiError> {
    let connection = state
        .shopify()
        .get_orders()
        .await
        .map_err(|e| ApiError::new(FAILURE_MESSAGE, e))?;

    let orders = connection.orders.iter().map(OrderSummary::from).collect();

    Ok(Json(OrdersResponse {
        success: true,
        orders,
    }))
}
