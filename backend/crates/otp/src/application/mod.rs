//! Application Layer - Use Cases
//!
//! Request, verify and commit are separate use cases so the UI can report
//! "code accepted" and so expiry is re-checked at commit.

pub mod cleanup;
pub mod commit_password;
pub mod config;
pub mod request_otp;
pub mod verify_otp;

use std::future::Future;
use std::time::Duration;

use crate::error::{OtpError, OtpResult};

/// Bound a repository call by the store deadline
pub(crate) async fn store_call<T, F>(limit: Duration, fut: F) -> OtpResult<T>
where
    F: Future<Output = OtpResult<T>>,
{
    platform::deadline::bounded(limit, fut)
        .await
        .map_err(|_| OtpError::StoreUnavailable)?
}

pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
