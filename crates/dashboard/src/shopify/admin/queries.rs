//! GraphQL query definitions for Shopify Admin API.
//!
//! Each query is a fixed document with a hand-written `GraphQLQuery` impl, so
//! the client can drive them through `graphql_client`'s request/response
//! envelopes without schema codegen. Only the fields the dashboard reads are
//! selected.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::shopify::types::{DraftOrder, MoneyBag};

// =============================================================================
// Shared response shapes
// =============================================================================

/// A GraphQL connection (`edges { node }` plus optional `pageInfo`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    /// Whether Shopify has more records after this page.
    pub fn has_next_page(&self) -> bool {
        self.page_info.as_ref().is_some_and(|p| p.has_next_page)
    }

    /// Unwrap the edges into their nodes.
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|e| e.node)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
}

// =============================================================================
// Order queries
// =============================================================================

pub struct GetOrders;

pub mod get_orders {
    use super::{Connection, Deserialize, MoneyBag, Serialize};

    pub const OPERATION_NAME: &str = "GetOrders";
    pub const QUERY: &str = r"query GetOrders($first: Int!, $lineItemsFirst: Int!) {
  orders(first: $first) {
    pageInfo { hasNextPage }
    edges {
      node {
        id
        name
        displayFinancialStatus
        currentTotalPriceSet { shopMoney { amount currencyCode } }
        lineItems(first: $lineItemsFirst) {
          edges {
            node {
              title
              quantity
              originalUnitPriceSet { shopMoney { amount currencyCode } }
            }
          }
        }
      }
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub first: i64,
        pub line_items_first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub orders: Connection<OrderNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OrderNode {
        pub id: String,
        pub name: String,
        pub display_financial_status: Option<String>,
        pub current_total_price_set: MoneyBag,
        pub line_items: Connection<LineItemNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LineItemNode {
        pub title: String,
        pub quantity: i64,
        pub original_unit_price_set: Option<MoneyBag>,
    }
}

impl GraphQLQuery for GetOrders {
    type Variables = get_orders::Variables;
    type ResponseData = get_orders::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_orders::QUERY,
            operation_name: get_orders::OPERATION_NAME,
        }
    }
}

// =============================================================================
// Draft order queries
// =============================================================================

pub struct GetDraftOrders;

pub mod get_draft_orders {
    use super::{Connection, Deserialize, DraftOrder, Serialize};

    pub const OPERATION_NAME: &str = "GetDraftOrders";
    pub const QUERY: &str = r"query GetDraftOrders($first: Int!) {
  draftOrders(first: $first) {
    pageInfo { hasNextPage }
    edges {
      node {
        id
        name
        email
        totalPriceSet { shopMoney { amount currencyCode } }
        createdAt
        status
      }
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub draft_orders: Connection<DraftOrder>,
    }
}

impl GraphQLQuery for GetDraftOrders {
    type Variables = get_draft_orders::Variables;
    type ResponseData = get_draft_orders::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_draft_orders::QUERY,
            operation_name: get_draft_orders::OPERATION_NAME,
        }
    }
}

// =============================================================================
// Product queries
// =============================================================================

pub struct GetProducts;

pub mod get_products {
    use super::{Connection, Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetProducts";
    pub const QUERY: &str = r"query GetProducts($first: Int!, $variantsFirst: Int!) {
  products(first: $first) {
    pageInfo { hasNextPage }
    edges {
      node {
        id
        title
        variants(first: $variantsFirst) {
          pageInfo { hasNextPage }
          edges {
            node {
              id
              title
              inventoryQuantity
            }
          }
        }
      }
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub first: i64,
        pub variants_first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: Connection<ProductNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductNode {
        pub id: String,
        pub title: String,
        pub variants: Connection<VariantNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VariantNode {
        pub id: String,
        pub title: String,
        pub inventory_quantity: Option<i64>,
    }
}

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_products::QUERY,
            operation_name: get_products::OPERATION_NAME,
        }
    }
}
