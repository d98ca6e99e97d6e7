//! Application state shared across handlers.

use std::sync::Arc;

use crate::{
    config::DashboardConfig,
    shopify::{AdminClient, AdminShopifyError},
};

/// Application state shared across all handlers.
///
/// Holds only immutable configuration and the Shopify client; nothing is
/// cached between requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    shopify: AdminClient,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the Shopify HTTP client cannot be built.
    pub fn new(config: DashboardConfig) -> Result<Self, AdminShopifyError> {
        let shopify = AdminClient::new(&config.shopify)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, shopify }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn shopify(&self) -> &AdminClient {
        &self.inner.shopify
    }
}
