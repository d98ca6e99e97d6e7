//! Shopify global IDs.
//!
//! The Admin API identifies every resource with a GID of the form
//! `gid://shopify/<Type>/<id>`. Tables show only the trailing numeric part.

/// Last path segment of an id, for display.
///
/// Accepts anything: strings without a `/` are returned unchanged.
///
/// ```rust
/// # use shop_insights_core::legacy_id;
/// assert_eq!(legacy_id("gid://shopify/Order/1001"), "1001");
/// ```
#[must_use]
pub fn legacy_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}
