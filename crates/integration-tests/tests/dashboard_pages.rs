//! Integration tests for the server-rendered dashboard pages.

use shop_insights_integration_tests::{
    draft_order_node, draft_orders_data, get, mock_any, mock_operation, order_node, orders_data,
    product_node, products_data, test_app,
};
use wiremock::{MockServer, ResponseTemplate};

/// Pull the Chart.js config embedded for `canvas_id` out of a page.
fn embedded_chart(page: &str, canvas_id: &str) -> serde_json::Value {
    let marker = format!("data-chart-for=\"{canvas_id}\">");
    let start = page.find(&marker).expect("chart config present") + marker.len();
    let len = page
        .get(start..)
        .and_then(|rest| rest.find("</script>"))
        .expect("closed script");
    let raw = page.get(start..start + len).expect("config slice");
    serde_json::from_str(raw).expect("chart config is JSON")
}

// =============================================================================
// /app/orders
// =============================================================================

#[tokio::test]
async fn orders_page_shows_table_chart_and_drafts() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetOrders",
        orders_data(vec![
            order_node(1001, Some("PAID"), "10", &[("Tee", 2, "5")]),
            order_node(1002, Some("PAID"), "10", &[("Tee", 1, "10")]),
            order_node(1003, Some("PENDING"), "3", &[("Sticker", 3, "1")]),
        ]),
    )
    .await;
    mock_operation(
        &server,
        "GetDraftOrders",
        draft_orders_data(vec![draft_order_node(77, None, Some("12.5"))]),
    )
    .await;

    let response = get(test_app(&server), "/app/orders").await;
    assert_eq!(response.status, 200);

    let page = &response.body;
    assert!(page.contains("<td>1001</td>"));
    assert!(page.contains("#1003"));
    assert!(page.contains("#D77"));
    assert!(page.contains("USD 12.50"));
    assert!(page.contains("2024-05-01"));

    let chart = embedded_chart(page, "status-chart");
    assert_eq!(chart["type"], "polarArea");
    assert_eq!(chart["data"]["labels"], serde_json::json!(["PAID", "PENDING"]));
    assert_eq!(chart["data"]["datasets"][0]["data"], serde_json::json!([2.0, 1.0]));
}

#[tokio::test]
async fn orders_page_keeps_drafts_when_orders_fail() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetDraftOrders",
        draft_orders_data(vec![draft_order_node(5, Some("a@example.com"), None)]),
    )
    .await;
    // Anything else, i.e. GetOrders, fails
    mock_any(&server, ResponseTemplate::new(503)).await;

    let response = get(test_app(&server), "/app/orders").await;

    assert_eq!(response.status, 200);
    assert!(response.body.contains("No orders found."));
    assert!(response.body.contains("a@example.com"));
    assert!(!response.body.contains("id=\"status-chart\""));
}

// =============================================================================
// /app/draftsOrders
// =============================================================================

#[tokio::test]
async fn draft_orders_page_uses_placeholders() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetDraftOrders",
        draft_orders_data(vec![draft_order_node(31, None, None)]),
    )
    .await;

    let response = get(test_app(&server), "/app/draftsOrders").await;

    assert_eq!(response.status, 200);
    assert!(response.body.contains("<td>gid://shopify/DraftOrder/31</td>"));
    assert!(response.body.contains("<td>N/A</td>"));
    assert!(response.body.contains("<td>—</td>"));
}

#[tokio::test]
async fn draft_orders_page_empty_on_failure() {
    let server = MockServer::start().await;
    mock_any(&server, ResponseTemplate::new(401)).await;

    let response = get(test_app(&server), "/app/draftsOrders").await;

    assert_eq!(response.status, 200);
    assert!(response.body.contains("No draft orders found."));
}

// =============================================================================
// /app/products
// =============================================================================

#[tokio::test]
async fn products_page_charts_inventory_per_title() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetProducts",
        products_data(vec![
            product_node(1, "Tee", &[Some(4), Some(6)], false),
            product_node(2, "Gift Card", &[], false),
        ]),
    )
    .await;

    let response = get(test_app(&server), "/app/products").await;
    assert_eq!(response.status, 200);

    let chart = embedded_chart(&response.body, "inventory-chart");
    assert_eq!(chart["type"], "bar");
    assert_eq!(chart["data"]["labels"], serde_json::json!(["Tee", "Gift Card"]));
    assert_eq!(chart["data"]["datasets"][0]["data"], serde_json::json!([10.0, 0.0]));
}

#[tokio::test]
async fn products_page_empty_state() {
    let server = MockServer::start().await;
    mock_operation(&server, "GetProducts", products_data(vec![])).await;

    let response = get(test_app(&server), "/app/products").await;

    assert_eq!(response.status, 200);
    assert!(response.body.contains("No products found."));
}

// =============================================================================
// /app/OrdersBarChart
// =============================================================================

#[tokio::test]
async fn orders_bar_chart_sums_totals_by_status() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetOrders",
        orders_data(vec![
            order_node(1, Some("PAID"), "19.99", &[]),
            order_node(2, Some("REFUNDED"), "5.00", &[]),
            order_node(3, Some("PAID"), "0.01", &[]),
        ]),
    )
    .await;

    let response = get(test_app(&server), "/app/OrdersBarChart").await;
    assert_eq!(response.status, 200);

    let chart = embedded_chart(&response.body, "totals-chart");
    assert_eq!(chart["data"]["labels"], serde_json::json!(["PAID", "REFUNDED"]));
    assert_eq!(chart["data"]["datasets"][0]["data"], serde_json::json!([20.0, 5.0]));
}

#[tokio::test]
async fn orders_bar_chart_empty_on_failure() {
    let server = MockServer::start().await;
    mock_any(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": null })),
    )
    .await;

    let response = get(test_app(&server), "/app/OrdersBarChart").await;

    assert_eq!(response.status, 200);
    assert!(response.body.contains("No data available to display."));
}

// =============================================================================
// Misc
// =============================================================================

#[tokio::test]
async fn root_redirects_to_orders_page() {
    let server = MockServer::start().await;

    let response = get(test_app(&server), "/").await;

    assert_eq!(response.status, 303);
    assert_eq!(response.headers["location"], "/app/orders");
}

#[tokio::test]
async fn health_does_not_call_shopify() {
    let server = MockServer::start().await;
    mock_any(&server, ResponseTemplate::new(500).set_body_string("down")).await;

    let response = get(test_app(&server), "/health").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "ok");
    assert!(
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}
