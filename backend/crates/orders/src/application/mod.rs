//! Application Layer - Use Cases

pub mod config;
pub mod delete_order;
pub mod place_order;
pub mod query_orders;
pub mod update_status;

use std::future::Future;
use std::time::Duration;

use crate::error::{OrderError, OrderResult};

/// Bound a repository call by the store deadline
///
/// Dropping a timed-out `create` drops its transaction, which rolls back.
pub(crate) async fn store_call<T, F>(limit: Duration, fut: F) -> OrderResult<T>
where
    F: Future<Output = OrderResult<T>>,
{
    platform::deadline::bounded(limit, fut)
        .await
        .map_err(|_| OrderError::StoreUnavailable)?
}
