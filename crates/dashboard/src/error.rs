//! Unified error handling for the dashboard.
//!
//! JSON endpoints answer every failure with the same body shape,
//! `{ "success": false, "message": ... }`, so the embedded front end only has
//! one thing to check. Upstream details are logged and sent to Sentry, never
//! echoed to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shopify::AdminShopifyError;

/// Error returned by the JSON API handlers.
#[derive(Debug, Error)]
#[error("{message}: {source}")]
pub struct ApiError {
    /// Fixed, client-safe message for the endpoint.
    message: &'static str,
    /// What actually went wrong.
    #[source]
    source: AppError,
}

impl ApiError {
    /// Wrap an error with the message the client will see.
    pub fn new(message: &'static str, source: impl Into<AppError>) -> Self {
        Self {
            message,
            source: source.into(),
        }
    }

    /// The client-facing message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// Failure body for JSON endpoints.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self.source);
        tracing::error!(
            error = %self.source,
            sentry_event_id = %event_id,
            "{}",
            self.message
        );

        let status = self.source.status();
        let body = FailureBody {
            success: false,
            message: self.message,
        };

        (status, Json(body)).into_response()
    }
}

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Shopify(_) => StatusCode::BAD_GATEWAY,
            Self::Template(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Dashboard request error"
        );

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Shopify(_) => "External service error",
            Self::Template(_) | Self::Internal(_) => "Internal server error",
        };

        (self.status(), message).into_response()
    }
}
