//! Conversions from GraphQL response shapes to domain types.

use shop_insights_core::PaymentStatus;

use crate::shopify::AdminShopifyError;
use crate::shopify::types::{
    DraftOrderConnection, Order, OrderConnection, OrderLineItem, Product, ProductConnection,
    ProductVariant,
};

use super::queries::{get_draft_orders, get_orders, get_products};

// =============================================================================
// Orders
// =============================================================================

pub fn convert_order_connection(
    data: get_orders::ResponseData,
) -> Result<OrderConnection, AdminShopifyError> {
    let has_next_page = data.orders.has_next_page();
    let orders = data
        .orders
        .into_nodes()
        .map(convert_order)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderConnection {
        orders,
        has_next_page,
    })
}

fn convert_order(node: get_orders::OrderNode) -> Result<Order, AdminShopifyError> {
    let line_items = node
        .line_items
        .into_nodes()
        .map(convert_line_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Order {
        payment_status: PaymentStatus::from_financial_status(
            node.display_financial_status.as_deref(),
        ),
        total_price: node.current_total_price_set.shop_money.to_price()?,
        id: node.id,
        name: node.name,
        line_items,
    })
}

fn convert_line_item(node: get_orders::LineItemNode) -> Result<OrderLineItem, AdminShopifyError> {
    let unit_price = node
        .original_unit_price_set
        .map(|set| set.shop_money.to_price())
        .transpose()?;

    Ok(OrderLineItem {
        title: node.title,
        quantity: node.quantity,
        unit_price,
    })
}

// =============================================================================
// Draft orders
// =============================================================================

pub fn convert_draft_order_connection(data: get_draft_orders::ResponseData) -> DraftOrderConnection {
    DraftOrderConnection {
        has_next_page: data.draft_orders.has_next_page(),
        draft_orders: data.draft_orders.into_nodes().collect(),
    }
}

// =============================================================================
// Products
// =============================================================================

pub fn convert_product_connection(data: get_products::ResponseData) -> ProductConnection {
    ProductConnection {
        has_next_page: data.products.has_next_page(),
        products: data.products.into_nodes().map(convert_product).collect(),
    }
}

fn convert_product(node: get_products::ProductNode) -> Product {
    let variants_truncated = node.variants.has_next_page();
    Product {
        id: node.id,
        title: node.title,
        variants: node
            .variants
            .into_nodes()
            .map(|v| ProductVariant {
                id: v.id,
                title: v.title,
                inventory_quantity: v.inventory_quantity,
            })
            .collect(),
        variants_truncated,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn products_response(variant_quantities: &[Option<i64>], has_more: bool) -> get_products::ResponseData {
        let edges: Vec<_> = variant_quantities
            .iter()
            .enumerate()
            .map(|(i, q)| {
                json!({ "node": {
                    "id": format!("gid://shopify/ProductVariant/{i}"),
                    "title": format!("Variant {i}"),
                    "inventoryQuantity": q,
                }})
            })
            .collect();

        serde_json::from_value(json!({
            "products": {
                "pageInfo": { "hasNextPage": false },
                "edges": [{ "node": {
                    "id": "gid://shopify/Product/1",
                    "title": "Hoodie",
                    "variants": { "pageInfo": { "hasNextPage": has_more }, "edges": edges }
                }}]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_product_sums_variants() {
        let conn = convert_product_connection(products_response(&[Some(3), None, Some(7)], false));
        let product = &conn.products[0];

        assert_eq!(product.title, "Hoodie");
        assert_eq!(product.variants.len(), 3);
        assert_eq!(product.total_quantity(), 10);
        assert!(!product.variants_truncated);
    }

    #[test]
    fn test_convert_product_truncated_variants_total_first_page_only() {
        let quantities = vec![Some(1); 100];
        let conn = convert_product_connection(products_response(&quantities, true));
        let product = &conn.products[0];

        assert!(product.variants_truncated);
        assert_eq!(product.total_quantity(), 100);
    }

    #[test]
    fn test_convert_order_formats_and_sums() {
        let data: get_orders::ResponseData = serde_json::from_value(json!({
            "orders": { "edges": [{ "node": {
                "id": "gid://shopify/Order/42",
                "name": "#1042",
                "displayFinancialStatus": "PAID",
                "currentTotalPriceSet": { "shopMoney": { "amount": "49.5", "currencyCode": "USD" } },
                "lineItems": { "edges": [
                    { "node": { "title": "Mug", "quantity": 2,
                        "originalUnitPriceSet": { "shopMoney": { "amount": "12.25", "currencyCode": "USD" } } } },
                    { "node": { "title": "Tee", "quantity": 1, "originalUnitPriceSet": null } }
                ]}
            }}]}
        }))
        .unwrap();

        let conn = convert_order_connection(data).unwrap();
        let order = &conn.orders[0];

        assert_eq!(order.total_quantity(), 3);
        assert_eq!(order.total_price.display(), "USD 49.50");
        assert_eq!(order.payment_status.as_str(), "PAID");
        assert_eq!(
            order.line_items[0].unit_price.as_ref().unwrap().display(),
            "USD 12.25"
        );
        assert!(order.line_items[1].unit_price.is_none());
        assert!(!conn.has_next_page);
    }

    #[test]
    fn test_convert_order_missing_status_is_not_available() {
        let data: get_orders::ResponseData = serde_json::from_value(json!({
            "orders": { "edges": [{ "node": {
                "id": "gid://shopify/Order/1",
                "name": "#1001",
                "displayFinancialStatus": null,
                "currentTotalPriceSet": { "shopMoney": { "amount": "0.00", "currencyCode": "USD" } },
                "lineItems": { "edges": [] }
            }}]}
        }))
        .unwrap();

        let conn = convert_order_connection(data).unwrap();
        assert_eq!(conn.orders[0].payment_status.as_str(), "N/A");
        assert_eq!(conn.orders[0].total_quantity(), 0);
    }

    #[test]
    fn test_convert_order_rejects_bad_money() {
        let data: get_orders::ResponseData = serde_json::from_value(json!({
            "orders": { "edges": [{ "node": {
                "id": "gid://shopify/Order/1",
                "name": "#1001",
                "displayFinancialStatus": "PAID",
                "currentTotalPriceSet": { "shopMoney": { "amount": "n/a", "currencyCode": "USD" } },
                "lineItems": { "edges": [] }
            }}]}
        }))
        .unwrap();

        let err = convert_order_connection(data).unwrap_err();
        assert!(matches!(err, AdminShopifyError::InvalidMoney(_)));
    }
}
