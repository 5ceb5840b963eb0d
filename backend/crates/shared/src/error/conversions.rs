//! Error conversions - store classification and HTTP rendering
//!
//! Provides [`classify_store_error`] (shared by every repository error type),
//! `From<sqlx::Error>` for [`AppError`] and the RFC 7807 `IntoResponse`.

#[cfg(feature = "sqlx")]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// sqlx のエラーを種別に分類
///
/// PostgreSQL のエラーコードは
/// <https://www.postgresql.org/docs/current/errcodes-appendix.html> を参照。
/// 接続断・プール枯渇・タイムアウトは `ServiceUnavailable` に寄せます。
#[cfg(feature = "sqlx")]
pub fn classify_store_error(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 23: Integrity Constraint Violation
            Some("23000" | "23001" | "23503" | "23505") => ErrorKind::Conflict,
            Some("23502" | "23514") => ErrorKind::BadRequest,
            // Class 53: Insufficient Resources, Class 57: Operator Intervention
            Some("53000" | "53100" | "53200" | "53300") => ErrorKind::ServiceUnavailable,
            Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

/// 一意制約違反 (23505) かどうか
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let kind = classify_store_error(&err);
        let message = match kind {
            ErrorKind::NotFound => "Record not found",
            ErrorKind::Conflict => "Integrity constraint violation",
            ErrorKind::BadRequest => "Constraint violation",
            ErrorKind::ServiceUnavailable => "Database unavailable",
            _ => "Database error",
        };
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.public_message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_not_found() {
        assert_eq!(
            classify_store_error(&sqlx::Error::RowNotFound),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        assert_eq!(
            classify_store_error(&sqlx::Error::PoolTimedOut),
            ErrorKind::ServiceUnavailable
        );
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.status_code(), 503);
    }

    #[test]
    fn test_io_error_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert_eq!(
            classify_store_error(&sqlx::Error::Io(io)),
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_protocol_error_is_internal() {
        let err = sqlx::Error::Protocol("unexpected message".into());
        assert_eq!(classify_store_error(&err), ErrorKind::InternalServerError);
        assert!(!is_unique_violation(&err));
    }
}
