//! Orders overview page: orders table, payment status chart, draft orders.

use askama::Template;
use axum::{extract::State, response::Html};
use shop_insights_core::{StatusBuckets, legacy_id};
use tracing::instrument;

use super::draft_orders::{DraftOrderRow, rows_or_empty};
use crate::{
    components::{ChartConfig, ChartKind, Dataset},
    error::AppError,
    shopify::Order,
    state::AppState,
};

/// Order row for templates.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: String,
    pub name: String,
    pub total_quantity: i64,
    pub payment_status: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: legacy_id(&order.id).to_string(),
            name: order.name.clone(),
            total_quantity: order.total_quantity(),
            payment_status: order.payment_status.as_str().to_string(),
        }
    }
}

/// Orders overview template.
#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub current_path: &'static str,
    pub orders: Vec<OrderRow>,
    /// Chart.js config for the status chart; `None` when there are no orders.
    pub status_chart: Option<String>,
    pub drafts: Vec<DraftOrderRow>,
}

/// Polar-area chart of order counts per payment status.
#[allow(clippy::cast_precision_loss)]
pub fn status_count_chart(orders: &[Order]) -> Option<ChartConfig> {
    let buckets = StatusBuckets::<u64>::count_by_status(orders.iter().map(|o| &o.payment_status));
    if buckets.is_empty() {
        return None;
    }

    let labels = buckets.labels().into_iter().map(str::to_string).collect();
    let counts = buckets.values().into_iter().map(|c| *c as f64).collect();

    Some(
        ChartConfig::new(
            ChartKind::PolarArea,
            labels,
            Dataset::with_palette("Orders by Payment Status", counts).border("#ffffff", 2),
        )
        .legend_position("bottom"),
    )
}

/// Orders overview handler.
///
/// Orders and draft orders are fetched concurrently; either failing only
/// empties its own section.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (orders_result, drafts_result) = tokio::join!(
        state.shopify().get_orders(),
        state.shopify().get_draft_orders()
    );

    let orders = match orders_result {
        Ok(conn) => conn.orders,
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            vec![]
        }
    };

    let status_chart = status_count_chart(&orders)
        .map(|chart| chart.to_script_json())
        .transpose()
        .map_err(|e| AppError::Internal(format!("chart serialization: {e}")))?;

    let template = OrdersTemplate {
        current_path: "/app/orders",
        orders: orders.iter().map(OrderRow::from).collect(),
        status_chart,
        drafts: rows_or_empty(drafts_result),
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_insights_core::{PaymentStatus, Price};

    use super::*;
    use crate::shopify::OrderLineItem;

    fn order(id: u32, status: &str, quantities: &[i64]) -> Order {
        Order {
            id: format!("gid://shopify/Order/{id}"),
            name: format!("#{id}"),
            payment_status: PaymentStatus::from(status),
            total_price: Price::parse("10.00", "USD").unwrap(),
            line_items: quantities
                .iter()
                .map(|&quantity| OrderLineItem {
                    title: "Item".to_string(),
                    quantity,
                    unit_price: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_row_uses_legacy_id() {
        let row = OrderRow::from(&order(5001, "PAID", &[1, 2]));
        assert_eq!(row.id, "5001");
        assert_eq!(row.total_quantity, 3);
        assert_eq!(row.payment_status, "PAID");
    }

    #[test]
    fn test_status_chart_counts() {
        let orders = vec![
            order(1, "PAID", &[]),
            order(2, "PAID", &[]),
            order(3, "PENDING", &[]),
        ];
        let chart = serde_json::to_value(status_count_chart(&orders).unwrap()).unwrap();

        assert_eq!(chart["type"], "polarArea");
        assert_eq!(chart["data"]["labels"], serde_json::json!(["PAID", "PENDING"]));
        assert_eq!(chart["data"]["datasets"][0]["data"], serde_json::json!([2.0, 1.0]));
    }

    #[test]
    fn test_status_chart_empty() {
        assert!(status_count_chart(&[]).is_none());
    }

    #[test]
    fn test_template_escapes_names() {
        let mut evil = order(9, "PAID", &[1]);
        evil.name = "<script>alert(1)</script>".to_string();

        let page = OrdersTemplate {
            current_path: "/app/orders",
            orders: vec![OrderRow::from(&evil)],
            status_chart: None,
            drafts: vec![],
        }
        .render()
        .unwrap();

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&#60;script&#62;"));
    }

    #[test]
    fn test_template_empty_states() {
        let page = OrdersTemplate {
            current_path: "/app/orders",
            orders: vec![],
            status_chart: None,
            drafts: vec![],
        }
        .render()
        .unwrap();

        assert!(page.contains("No orders found."));
        assert!(page.contains("No draft orders found."));
        assert!(!page.contains("id=\"status-chart\""));
    }
}
