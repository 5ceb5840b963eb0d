//! Contact Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_store_error, kind::ErrorKind};
use thiserror::Error;

pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already subscribed")]
    AlreadySubscribed,

    #[error("Contact not found")]
    ContactNotFound,

    #[error("Subscriber not found")]
    SubscriberNotFound,

    /// Store call exceeded its deadline
    #[error("Store unavailable")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::Validation(_) => ErrorKind::BadRequest,
            ContactError::AlreadySubscribed => ErrorKind::Conflict,
            ContactError::ContactNotFound | ContactError::SubscriberNotFound => {
                ErrorKind::NotFound
            }
            ContactError::StoreUnavailable => ErrorKind::ServiceUnavailable,
            ContactError::Database(e) => match classify_store_error(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            ContactError::Database(e) => {
                tracing::error!(error = %e, "Contact database error");
            }
            ContactError::StoreUnavailable => {
                tracing::error!("Contact store call timed out");
            }
            _ => {
                tracing::debug!(error = %self, "Contact error");
            }
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
