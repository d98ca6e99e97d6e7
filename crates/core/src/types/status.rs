//! Order payment status as shown on the dashboard.
//!
//! Shopify's `displayFinancialStatus` is kept as the raw string rather than an
//! enum: the dashboard only displays and groups it, and new Shopify values must
//! show up in charts instead of failing deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment status of an order (Shopify `displayFinancialStatus`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentStatus(String);

impl PaymentStatus {
    /// Placeholder shown when Shopify reports no financial status.
    pub const NOT_AVAILABLE: &'static str = "N/A";

    /// Bucket used for statuses with no text at all.
    pub const UNKNOWN_BUCKET: &'static str = "UNKNOWN";

    /// Build from the optional API field. Missing or empty becomes `"N/A"`.
    #[must_use]
    pub fn from_financial_status(status: Option<&str>) -> Self {
        match status {
            Some(s) if !s.is_empty() => Self(s.to_string()),
            _ => Self(Self::NOT_AVAILABLE.to_string()),
        }
    }

    /// The status as displayed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used to group orders for charts: the uppercased status,
    /// or `"UNKNOWN"` when empty.
    #[must_use]
    pub fn bucket_key(&self) -> String {
        if self.0.is_empty() {
            Self::UNKNOWN_BUCKET.to_string()
        } else {
            self.0.to_uppercase()
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
