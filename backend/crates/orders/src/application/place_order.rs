//! Place Order Use Case

use std::sync::Arc;

use kernel::id::OrderId;

use crate::application::config::OrderConfig;
use crate::application::store_call;
use crate::domain::checkout::CheckoutInput;
use crate::domain::repository::OrderRepository;
use crate::error::OrderResult;

pub struct PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
    config: Arc<OrderConfig>,
}

impl<R> PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<OrderConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CheckoutInput) -> OrderResult<OrderId> {
        let order = input.validate()?;

        if order.items.is_empty() {
            tracing::warn!("Order captured with an empty cart");
        }

        let order_id = store_call(self.config.store_timeout, self.repo.create(&order)).await?;

        tracing::info!(
            order_id = %order_id,
            items = order.items.len(),
            total = %order.totals.total,
            "Order created"
        );

        Ok(order_id)
    }
}
