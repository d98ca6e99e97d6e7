//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /                       - Redirect to /app/orders
//!
//! # Pages (server-rendered, embedded in the Shopify admin)
//! GET  /app/orders             - Orders table, status chart, draft orders
//! GET  /app/draftsOrders       - Draft orders table
//! GET  /app/products           - Inventory per product chart
//! GET  /app/OrdersBarChart     - Order totals per payment status chart
//!
//! # JSON API
//! GET  /api/order              - Recent orders with line items
//! GET  /api/draftsOrders       - Recent draft orders
//! GET  /api/product            - Products with summed inventory
//! ```

pub mod api;
pub mod draft_orders;
pub mod orders;
pub mod orders_chart;
pub mod products;

use axum::{Router, middleware::from_fn_with_state, response::Redirect, routing::get};

use crate::{middleware::embed_headers_middleware, state::AppState};

/// All dashboard routes, without state.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/app/orders", get(orders::index))
        .route("/app/draftsOrders", get(draft_orders::index))
        .route("/app/products", get(products::index))
        .route("/app/OrdersBarChart", get(orders_chart::index))
        .merge(api::router())
}

/// The routed application with embed headers and state applied.
///
/// Tracing and Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(from_fn_with_state(state.clone(), embed_headers_middleware))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Shopify is not contacted.
async fn health() -> &'static str {
    "ok"
}

async fn root() -> Redirect {
    Redirect::to("/app/orders")
}
