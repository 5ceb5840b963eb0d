//! In-memory Repository Implementation
//!
//! Used by tests and local development without a database. A capture is
//! staged completely before it touches the map, so a failure part-way
//! leaves nothing behind, mirroring the transactional Postgres path.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::email::Email;
use kernel::id::{OrderId, OrderItemId};
use tokio::sync::Mutex;

use crate::domain::entities::{NewOrder, Order, OrderItem};
use crate::domain::repository::OrderRepository;
use crate::domain::value_objects::OrderStatus;
use crate::error::{OrderError, OrderResult};

#[derive(Default)]
struct State {
    next_order_id: i64,
    next_item_id: i64,
    orders: BTreeMap<i64, Order>,
}

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<Mutex<State>>,
    /// Abort captures when writing the item at this 1-based position
    fail_at_item: Option<usize>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a store failure while writing item number `position`
    pub fn failing_at_item(position: usize) -> Self {
        Self {
            fail_at_item: Some(position),
            ..Self::default()
        }
    }

    pub async fn order_count(&self) -> usize {
        self.state.lock().await.orders.len()
    }

    pub async fn item_count(&self) -> usize {
        self.state
            .lock()
            .await
            .orders
            .values()
            .map(|o| o.items.len())
            .sum()
    }

    fn newest_first<'a>(orders: impl Iterator<Item = &'a Order>) -> Vec<Order> {
        let mut list: Vec<Order> = orders.cloned().collect();
        list.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        list
    }
}

impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &NewOrder) -> OrderResult<OrderId> {
        let mut state = self.state.lock().await;

        let order_id = OrderId::from_i64(state.next_order_id + 1);
        let mut next_item_id = state.next_item_id;
        let mut items = Vec::with_capacity(order.items.len());

        for (i, item) in order.items.iter().enumerate() {
            if self.fail_at_item == Some(i + 1) {
                return Err(OrderError::TransactionAborted(sqlx::Error::Protocol(
                    "simulated item insert failure".into(),
                )));
            }
            next_item_id += 1;
            items.push(OrderItem {
                id: OrderItemId::from_i64(next_item_id),
                order_id,
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                image_url: item.image_url.clone(),
            });
        }

        state.next_order_id = order_id.as_i64();
        state.next_item_id = next_item_id;
        state.orders.insert(
            order_id.as_i64(),
            Order {
                id: order_id,
                customer: order.customer.clone(),
                totals: order.totals,
                payment: order.payment.clone(),
                status: OrderStatus::Pending,
                created_at: Utc::now(),
                items,
            },
        );

        Ok(order_id)
    }

    async fn find_by_id(&self, id: OrderId) -> OrderResult<Option<Order>> {
        Ok(self.state.lock().await.orders.get(&id.as_i64()).cloned())
    }

    async fn list_all(&self) -> OrderResult<Vec<Order>> {
        let state = self.state.lock().await;
        Ok(Self::newest_first(state.orders.values()))
    }

    async fn list_by_email(&self, email: &Email) -> OrderResult<Vec<Order>> {
        let state = self.state.lock().await;
        Ok(Self::newest_first(
            state.orders.values().filter(|o| &o.customer.email == email),
        ))
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> OrderResult<Option<Order>> {
        let mut state = self.state.lock().await;
        Ok(state.orders.get_mut(&id.as_i64()).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn delete(&self, id: OrderId) -> OrderResult<bool> {
        Ok(self.state.lock().await.orders.remove(&id.as_i64()).is_some())
    }
}
