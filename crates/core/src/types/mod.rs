//! Core types for Shop Insights.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::legacy_id;
pub use price::{Price, PriceError};
pub use status::PaymentStatus;
