//! Sales Error Types
//!
//! Customer/order error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::sqlx_error_kind;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{CustomerId, OrderId};
use thiserror::Error;

/// Sales-specific result type alias
pub type SalesResult<T> = Result<T, SalesError>;

/// Sales-specific error variants
#[derive(Debug, Error)]
pub enum SalesError {
    #[error("Customer with id [{0}] not found")]
    CustomerNotFound(CustomerId),

    #[error("Order with id [{0}] not found")]
    OrderNotFound(OrderId),

    /// Order update matched nothing: the order or its new customer is missing
    #[error("Order with id [{order}] or customer with id [{customer}] not found")]
    OrderOrCustomerNotFound { order: OrderId, customer: CustomerId },

    /// Request-level validation (ids, pagination parameters)
    #[error(transparent)]
    Request(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SalesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        self.kind().http_status()
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SalesError::CustomerNotFound(_)
            | SalesError::OrderNotFound(_)
            | SalesError::OrderOrCustomerNotFound { .. } => ErrorKind::NotFound,
            SalesError::Request(err) => err.kind(),
            SalesError::Database(err) => sqlx_error_kind(err),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            SalesError::Database(err) => AppError::from(err),
            SalesError::Request(err) => err,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            SalesError::Database(e) => {
                tracing::error!(error = %e, "Sales database error");
            }
            SalesError::Request(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Sales request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Sales error");
            }
        }
    }
}

impl IntoResponse for SalesError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
