//! Draft orders page.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{
    error::AppError,
    shopify::{AdminShopifyError, DraftOrder, DraftOrderConnection},
    state::AppState,
};

/// Shown in place of a missing email.
const NO_EMAIL: &str = "N/A";
/// Shown in place of a missing total.
const NO_TOTAL: &str = "—";

/// Draft order row for templates.
#[derive(Debug, Clone)]
pub struct DraftOrderRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub total: String,
    pub status: String,
    pub created_at: String,
}

impl From<&DraftOrder> for DraftOrderRow {
    fn from(draft: &DraftOrder) -> Self {
        Self {
            id: draft.id.clone(),
            name: draft.name.clone(),
            email: draft.email.clone().unwrap_or_else(|| NO_EMAIL.to_string()),
            total: draft
                .total_price()
                .map_or_else(|| NO_TOTAL.to_string(), |p| p.display()),
            status: draft.status.clone(),
            created_at: draft.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Draft orders page template.
#[derive(Template)]
#[template(path = "draft_orders.html")]
pub struct DraftOrdersTemplate {
    pub current_path: &'static str,
    pub drafts: Vec<DraftOrderRow>,
}

/// Draft order rows, or none when the fetch failed (the error is logged).
pub(crate) fn rows_or_empty(
    result: Result<DraftOrderConnection, AdminShopifyError>,
) -> Vec<DraftOrderRow> {
    match result {
        Ok(conn) => conn.draft_orders.iter().map(DraftOrderRow::from).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch draft orders: {e}");
            vec![]
        }
    }
}

/// Draft orders page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = DraftOrdersTemplate {
        current_path: "/app/draftsOrders",
        drafts: rows_or_empty(state.shopify().get_draft_orders().await),
    };

    Ok(Html(template.render()?))
}
