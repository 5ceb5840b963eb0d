//! Order Query Use Cases (pure reads)

use std::sync::Arc;

use kernel::email::Email;
use kernel::id::OrderId;

use crate::application::config::OrderConfig;
use crate::application::store_call;
use crate::domain::entities::Order;
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

pub struct GetOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
    config: Arc<OrderConfig>,
}

impl<R> GetOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<OrderConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: OrderId) -> OrderResult<Order> {
        store_call(self.config.store_timeout, self.repo.find_by_id(id))
            .await?
            .ok_or(OrderError::NotFound)
    }
}

pub struct ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
    config: Arc<OrderConfig>,
}

impl<R> ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<OrderConfig>) -> Self {
        Self { repo, config }
    }

    /// All orders, or only those placed with `email`
    pub async fn execute(&self, email: Option<&str>) -> OrderResult<Vec<Order>> {
        match email {
            None => store_call(self.config.store_timeout, self.repo.list_all()).await,
            Some(raw) => {
                let email = Email::new(raw)
                    .map_err(|e| OrderError::ValidationFailed(e.message().to_string()))?;
                store_call(self.config.store_timeout, self.repo.list_by_email(&email)).await
            }
        }
    }
}
