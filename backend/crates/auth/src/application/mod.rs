//! Application Layer - Use Cases

pub mod admins;
pub mod change_password;
pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod users;

use std::future::Future;
use std::time::Duration;

use kernel::email::Email;

use crate::error::{AuthError, AuthResult};

pub(crate) async fn store_call<T, F>(limit: Duration, fut: F) -> AuthResult<T>
where
    F: Future<Output = AuthResult<T>>,
{
    platform::deadline::bounded(limit, fut)
        .await
        .map_err(|_| AuthError::StoreUnavailable)?
}

pub(crate) fn parse_email(raw: &str) -> AuthResult<Email> {
    Email::new(raw).map_err(|e| AuthError::Validation(e.message().to_string()))
}
