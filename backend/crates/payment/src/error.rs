//! Payment Error Types
//!
//! Gateway detail (status, body) is logged and never returned to callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type PaymentResult<T> = Result<T, PaymentError>;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("{0}")]
    InvalidAmount(String),

    #[error("currency must be a three-letter ISO 4217 code")]
    InvalidCurrency,

    /// The gateway answered with a non-success status
    #[error("Payment gateway rejected the order ({status}): {body}")]
    GatewayRejected { status: u16, body: String },

    /// The gateway could not be reached or its answer could not be read
    #[error("Payment gateway unreachable: {0}")]
    GatewayUnreachable(String),

    #[error("Payment gateway timed out")]
    GatewayTimeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::InvalidAmount(_) | PaymentError::InvalidCurrency => {
                ErrorKind::BadRequest
            }
            PaymentError::GatewayRejected { .. }
            | PaymentError::GatewayUnreachable(_)
            | PaymentError::GatewayTimeout => ErrorKind::BadGateway,
            PaymentError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            PaymentError::GatewayRejected { status, body } => {
                tracing::error!(status, body = %body, "Payment gateway rejected order");
            }
            PaymentError::GatewayUnreachable(msg) => {
                tracing::error!(error = %msg, "Payment gateway unreachable");
            }
            PaymentError::GatewayTimeout => {
                tracing::error!("Payment gateway call timed out");
            }
            PaymentError::Internal(msg) => {
                tracing::error!(message = %msg, "Payment internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Payment request rejected");
            }
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_failures_are_502_and_generic() {
        let err = PaymentError::GatewayRejected {
            status: 401,
            body: "Authentication failed for key rzp_test_abc".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(!err.to_app_error().public_message().contains("rzp_test_abc"));
        assert_eq!(PaymentError::GatewayTimeout.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_input_errors_are_400() {
        assert_eq!(
            PaymentError::InvalidAmount("amount is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PaymentError::InvalidCurrency.status_code(), StatusCode::BAD_REQUEST);
    }
}
