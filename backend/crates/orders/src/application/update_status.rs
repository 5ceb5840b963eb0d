//! Update Order Status Use Case

use std::sync::Arc;

use kernel::id::OrderId;

use crate::application::config::OrderConfig;
use crate::application::store_call;
use crate::domain::entities::Order;
use crate::domain::repository::OrderRepository;
use crate::domain::value_objects::OrderStatus;
use crate::error::{OrderError, OrderResult};

pub struct UpdateOrderStatusUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
    config: Arc<OrderConfig>,
}

impl<R> UpdateOrderStatusUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<OrderConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: OrderId, status: &str) -> OrderResult<Order> {
        let status = OrderStatus::from_code(status).ok_or_else(|| {
            OrderError::ValidationFailed(format!(
                "status must be one of: {}",
                OrderStatus::ALL.map(|s| s.code()).join(", ")
            ))
        })?;

        let order = store_call(self.config.store_timeout, self.repo.update_status(id, status))
            .await?
            .ok_or(OrderError::NotFound)?;

        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(order)
    }
}
