//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::{OrderId, OrderItemId};
use rust_decimal::Decimal;

use crate::domain::value_objects::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
}

/// Monetary totals; `total == subtotal + shipping + tax` holds for every
/// value that passed checkout validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub method: Option<String>,
    pub status: Option<String>,
    /// Gateway payment id
    pub reference: Option<String>,
}

/// A validated order that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: CustomerDetails,
    pub totals: OrderTotals,
    pub payment: PaymentDetails,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: Option<String>,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// First image of the cart entry, empty when it had none
    pub image_url: String,
}

/// A persisted order with its items in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerDetails,
    pub totals: OrderTotals,
    pub payment: PaymentDetails,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: Option<String>,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub image_url: String,
}
