//! JSON API route handlers.
//!
//! Every endpoint answers `{ "success": true, ... }` on success and
//! `{ "success": false, "message": ... }` with a 502 when Shopify fails.

pub mod draft_orders;
pub mod orders;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(orders::router())
        .merge(draft_orders::router())
        .merge(products::router())
}
