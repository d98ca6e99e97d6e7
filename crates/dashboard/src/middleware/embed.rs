//! Response headers for running inside the Shopify admin iframe.
//!
//! The dashboard is framed by the admin, so `X-Frame-Options` is not set.
//! Framing is instead restricted to the shop's own domain and
//! `admin.shopify.com` through the CSP `frame-ancestors` directive.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS},
    },
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Origin of the Shopify admin that embeds the app.
pub const SHOPIFY_ADMIN_ORIGIN: &str = "https://admin.shopify.com";

/// Build the CSP value that lets only the shop and the Shopify admin frame us.
///
/// ```
/// use shop_insights_dashboard::middleware::frame_ancestors_policy;
///
/// assert_eq!(
///     frame_ancestors_policy("acme.myshopify.com"),
///     "frame-ancestors https://acme.myshopify.com https://admin.shopify.com"
/// );
/// ```
#[must_use]
pub fn frame_ancestors_policy(store: &str) -> String {
    format!("frame-ancestors https://{store} {SHOPIFY_ADMIN_ORIGIN}")
}

/// Add embedding and hardening headers to every response.
pub async fn embed_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    let policy = frame_ancestors_policy(&state.config().shopify.store);
    match HeaderValue::from_str(&policy) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Store domain is not a valid header value");
        }
    }

    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
