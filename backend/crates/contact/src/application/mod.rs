//! Application Layer - Use Cases

pub mod config;
pub mod contacts;
pub mod subscribers;

use std::future::Future;
use std::time::Duration;

use crate::error::{ContactError, ContactResult};

pub(crate) async fn store_call<T, F>(limit: Duration, fut: F) -> ContactResult<T>
where
    F: Future<Output = ContactResult<T>>,
{
    platform::deadline::bounded(limit, fut)
        .await
        .map_err(|_| ContactError::StoreUnavailable)?
}
