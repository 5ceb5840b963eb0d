//! OTP Error Types
//!
//! OTP-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Verification failures are deliberately absent: a failed verify is a
//! normal `verified: false` response, never an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_store_error, kind::ErrorKind};
use thiserror::Error;

/// OTP-specific result type alias
pub type OtpResult<T> = Result<T, OtpError>;

#[derive(Debug, Error)]
pub enum OtpError {
    /// Missing or malformed email
    #[error("{0}")]
    InvalidEmail(String),

    /// New password rejected by the password policy
    #[error("{0}")]
    InvalidPassword(String),

    /// The code could not be handed to the mail relay (or it timed out)
    #[error("Failed to send OTP")]
    DeliveryFailed,

    /// Commit attempted with no challenge on record
    #[error("No active OTP challenge for this email")]
    NoActiveChallenge,

    /// Commit attempted on an expired or unverified challenge
    #[error("OTP not verified or expired")]
    NotVerified,

    /// Challenge was valid but no account carries this email
    #[error("User not found")]
    UserNotFound,

    /// Store call exceeded its deadline
    #[error("Store unavailable")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OtpError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OtpError::InvalidEmail(_) | OtpError::InvalidPassword(_) => ErrorKind::BadRequest,
            OtpError::DeliveryFailed => ErrorKind::BadGateway,
            OtpError::NoActiveChallenge | OtpError::NotVerified => ErrorKind::Unauthorized,
            OtpError::UserNotFound => ErrorKind::NotFound,
            OtpError::StoreUnavailable => ErrorKind::ServiceUnavailable,
            OtpError::Database(e) => match classify_store_error(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            OtpError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            OtpError::NotVerified | OtpError::NoActiveChallenge => {
                err.with_action("Request a new code and verify it before changing the password")
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            OtpError::Database(e) => {
                tracing::error!(error = %e, "OTP database error");
            }
            OtpError::Internal(msg) => {
                tracing::error!(message = %msg, "OTP internal error");
            }
            OtpError::StoreUnavailable => {
                tracing::error!("OTP store call timed out");
            }
            OtpError::DeliveryFailed => {
                tracing::warn!("OTP delivery failed");
            }
            OtpError::NotVerified | OtpError::NoActiveChallenge => {
                tracing::warn!(error = %self, "Password commit rejected");
            }
            _ => {
                tracing::debug!(error = %self, "OTP error");
            }
        }
    }
}

impl IntoResponse for OtpError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(OtpError::InvalidEmail("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(OtpError::DeliveryFailed.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(OtpError::NotVerified.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(OtpError::NoActiveChallenge.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(OtpError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            OtpError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            OtpError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            OtpError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_text_not_public() {
        let err = OtpError::Database(sqlx::Error::Protocol("secret detail".into()));
        let app = err.to_app_error();
        assert!(!app.public_message().contains("secret detail"));
    }
}
