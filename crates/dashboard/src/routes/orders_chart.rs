//! Order totals per payment status.

use askama::Template;
use axum::{extract::State, response::Html};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use shop_insights_core::StatusBuckets;
use tracing::instrument;

use crate::{
    components::{ChartConfig, ChartKind, Dataset},
    error::AppError,
    shopify::Order,
    state::AppState,
};

/// Orders bar chart template.
#[derive(Template)]
#[template(path = "orders_chart.html")]
pub struct OrdersChartTemplate {
    pub current_path: &'static str,
    /// `None` renders the empty state.
    pub totals_chart: Option<String>,
}

/// Bar chart of summed order totals per payment status.
///
/// Amounts are summed as decimals and only converted to floating point for
/// drawing. Orders in different currencies are summed as-is.
pub fn totals_chart(orders: &[Order]) -> Option<ChartConfig> {
    let buckets = StatusBuckets::<Decimal>::totals_by_status(
        orders
            .iter()
            .map(|o| (&o.payment_status, o.total_price.amount)),
    );
    if buckets.is_empty() {
        return None;
    }

    let labels = buckets.labels().into_iter().map(str::to_string).collect();
    let totals = buckets
        .values()
        .into_iter()
        .map(|total| total.round_dp(2).to_f64().unwrap_or_default())
        .collect();

    Some(
        ChartConfig::new(
            ChartKind::Bar,
            labels,
            Dataset::with_palette("Total Order Value", totals),
        )
        .title("Order Totals by Payment Status")
        .axes("Payment Status", "Total"),
    )
}

/// Orders bar chart handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let orders = match state.shopify().get_orders().await {
        Ok(conn) => conn.orders,
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            vec![]
        }
    };

    let totals_chart = totals_chart(&orders)
        .map(|chart| chart.to_script_json())
        .transpose()
        .map_err(|e| AppError::Internal(format!("chart serialization: {e}")))?;

    let template = OrdersChartTemplate {
        current_path: "/app/OrdersBarChart",
        totals_chart,
    };

    Ok(Html(template.render()?))
}
