//! Domain types returned by the Shopify Admin client.
//!
//! These are flattened versions of the GraphQL responses: connections are
//! unwrapped into plain `Vec`s and money is parsed into [`Price`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_insights_core::{PaymentStatus, Price, PriceError, total_quantity};

// =============================================================================
// Money Types
// =============================================================================

/// Monetary amount with currency code, as sent by Shopify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Parse into a decimal [`Price`].
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the amount is not a decimal.
    pub fn to_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.amount, &self.currency_code)
    }
}

/// Shopify `MoneyBag`; only the shop currency is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyBag {
    /// Amount in the shop's currency.
    pub shop_money: Money,
}

// =============================================================================
// Order Types
// =============================================================================

/// An order with its line items.
#[derive(Debug, Clone)]
pub struct Order {
    /// Shopify GID.
    pub id: String,
    /// Display name (e.g., "#1001").
    pub name: String,
    /// Display financial status.
    pub payment_status: PaymentStatus,
    /// Current total after edits and refunds.
    pub total_price: Price,
    /// Line items (first page only).
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Sum of line-item quantities.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        total_quantity(self.line_items.iter().map(|item| Some(item.quantity)))
    }
}

/// A line item on an order.
#[derive(Debug, Clone)]
pub struct OrderLineItem {
    /// Product title at time of purchase.
    pub title: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price before discounts.
    pub unit_price: Option<Price>,
}

/// First page of orders.
#[derive(Debug, Clone)]
pub struct OrderConnection {
    pub orders: Vec<Order>,
    pub has_next_page: bool,
}

// =============================================================================
// Draft Order Types
// =============================================================================

/// A draft order, kept in the API's own shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrder {
    /// Shopify GID.
    pub id: String,
    /// Draft name (e.g., "#D12").
    pub name: String,
    /// Customer email, if any.
    pub email: Option<String>,
    /// Total price.
    pub total_price_set: Option<MoneyBag>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// `OPEN`, `INVOICE_SENT` or `COMPLETED`.
    pub status: String,
}

impl DraftOrder {
    /// Parsed total price, if present and well-formed.
    #[must_use]
    pub fn total_price(&self) -> Option<Price> {
        self.total_price_set
            .as_ref()
            .and_then(|set| set.shop_money.to_price().ok())
    }
}

/// First page of draft orders.
#[derive(Debug, Clone)]
pub struct DraftOrderConnection {
    pub draft_orders: Vec<DraftOrder>,
    pub has_next_page: bool,
}

// =============================================================================
// Product Types
// =============================================================================

/// A product with its variants' inventory.
#[derive(Debug, Clone)]
pub struct Product {
    /// Shopify GID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Variants (first page only).
    pub variants: Vec<ProductVariant>,
    /// Shopify reported more variants than were fetched.
    pub variants_truncated: bool,
}

impl Product {
    /// Sum of variant inventory quantities over the fetched variants.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        total_quantity(self.variants.iter().map(|v| v.inventory_quantity))
    }
}

/// A product variant.
#[derive(Debug, Clone)]
pub struct ProductVariant {
    /// Shopify GID.
    pub id: String,
    /// Variant title (e.g., "Small / Red").
    pub title: String,
    /// Inventory across locations; `None` when untracked.
    pub inventory_quantity: Option<i64>,
}

/// First page of products.
#[derive(Debug, Clone)]
pub struct ProductConnection {
    pub products: Vec<Product>,
    pub has_next_page: bool,
}
