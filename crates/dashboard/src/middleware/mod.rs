//! HTTP middleware for the dashboard.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Embed headers (frame-ancestors CSP, nosniff, referrer policy)

pub mod embed;

pub use embed::{embed_headers_middleware, frame_ancestors_policy};
