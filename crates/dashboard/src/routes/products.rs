//! Product inventory page.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{
    components::{ChartConfig, ChartKind, Dataset},
    error::AppError,
    shopify::Product,
    state::AppState,
};

/// Products page template.
#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub current_path: &'static str,
    /// `None` renders the empty state.
    pub inventory_chart: Option<String>,
}

/// Bar chart of total inventory per product title.
#[allow(clippy::cast_precision_loss)]
pub fn inventory_chart(products: &[Product]) -> Option<ChartConfig> {
    if products.is_empty() {
        return None;
    }

    let labels = products.iter().map(|p| p.title.clone()).collect();
    let quantities = products.iter().map(|p| p.total_quantity() as f64).collect();

    Some(
        ChartConfig::new(
            ChartKind::Bar,
            labels,
            Dataset::single_color(
                "Total Quantity",
                quantities,
                "rgba(0, 128, 96, 0.7)",
                "#008060",
            ),
        )
        .title("Product Inventory Overview")
        .axes("Product Name", "Total Quantity"),
    )
}

/// Products page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = match state.shopify().get_products().await {
        Ok(conn) => conn.products,
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            vec![]
        }
    };

    let inventory_chart = inventory_chart(&products)
        .map(|chart| chart.to_script_json())
        .transpose()
        .map_err(|e| AppError::Internal(format!("chart serialization: {e}")))?;

    let template = ProductsTemplate {
        current_path: "/app/products",
        inventory_chart,
    };

    Ok(Html(template.render()?))
}
