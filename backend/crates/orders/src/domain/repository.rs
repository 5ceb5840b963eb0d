//! Repository Traits

use kernel::email::Email;
use kernel::id::OrderId;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::value_objects::OrderStatus;
use crate::error::OrderResult;

#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Write the header and every item as one atomic unit
    async fn create(&self, order: &NewOrder) -> OrderResult<OrderId>;

    async fn find_by_id(&self, id: OrderId) -> OrderResult<Option<Order>>;

    /// Newest first, each with its items
    async fn list_all(&self) -> OrderResult<Vec<Order>>;

    /// Newest first, each with its items
    async fn list_by_email(&self, email: &Email) -> OrderResult<Vec<Order>>;

    /// `None` when no order has `id`
    async fn update_status(&self, id: OrderId, status: OrderStatus)
    -> OrderResult<Option<Order>>;

    /// Removes the order and its items; `false` when no order has `id`
    async fn delete(&self, id: OrderId) -> OrderResult<bool>;
}
