//! Order Error Types
//!
//! Order-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Store error text never reaches the
//! response body; it is logged and replaced by a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_store_error, kind::ErrorKind};
use thiserror::Error;

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Error)]
pub enum OrderError {
    /// Payload rejected before any write
    #[error("{0}")]
    ValidationFailed(String),

    /// A cart entry could not be turned into an order item (1-based position)
    #[error("Line item {position}: {reason}")]
    MalformedLineItem { position: usize, reason: &'static str },

    #[error("Order not found")]
    NotFound,

    /// A statement inside the capture transaction failed; nothing was kept
    #[error("Order transaction aborted: {0}")]
    TransactionAborted(#[source] sqlx::Error),

    /// Store call exceeded its deadline
    #[error("Store unavailable")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::ValidationFailed(_) | OrderError::MalformedLineItem { .. } => {
                ErrorKind::BadRequest
            }
            OrderError::NotFound => ErrorKind::NotFound,
            OrderError::TransactionAborted(_) => ErrorKind::InternalServerError,
            OrderError::StoreUnavailable => ErrorKind::ServiceUnavailable,
            OrderError::Database(e) => match classify_store_error(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
        }
    }

    /// Whether this is one of the `ValidationFailed` family
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrderError::ValidationFailed(_) | OrderError::MalformedLineItem { .. }
        )
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            OrderError::TransactionAborted(e) => {
                tracing::error!(error = %e, "Order transaction rolled back");
            }
            OrderError::Database(e) => {
                tracing::error!(error = %e, "Order database error");
            }
            OrderError::StoreUnavailable => {
                tracing::error!("Order store call timed out");
            }
            OrderError::ValidationFailed(_) | OrderError::MalformedLineItem { .. } => {
                tracing::info!(error = %self, "Order rejected");
            }
            OrderError::NotFound => {
                tracing::debug!("Order not found");
            }
        }
    }
}

/// Failures inside the capture transaction
///
/// Lost connections still read as unavailability; anything else aborts.
pub(crate) fn aborted(err: sqlx::Error) -> OrderError {
    match classify_store_error(&err) {
        ErrorKind::ServiceUnavailable => OrderError::Database(err),
        _ => OrderError::TransactionAborted(err),
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_family() {
        let err = OrderError::MalformedLineItem {
            position: 2,
            reason: "price is not a valid amount",
        };
        assert!(err.is_validation());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Line item 2: price is not a valid amount");
    }

    #[test]
    fn test_store_failures() {
        assert_eq!(
            OrderError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            aborted(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        let err = aborted(sqlx::Error::Protocol("boom".into()));
        assert!(matches!(err, OrderError::TransactionAborted(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_app_error().public_message().contains("boom"));
    }
}
