//! Delete Order Use Case

use std::sync::Arc;

use kernel::id::OrderId;

use crate::application::config::OrderConfig;
use crate::application::store_call;
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

pub struct DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
    config: Arc<OrderConfig>,
}

impl<R> DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<OrderConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: OrderId) -> OrderResult<()> {
        let deleted = store_call(self.config.store_timeout, self.repo.delete(id)).await?;
        if !deleted {
            return Err(OrderError::NotFound);
        }
        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}
