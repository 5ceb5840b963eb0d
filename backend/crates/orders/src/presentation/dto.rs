//! API DTOs (Data Transfer Objects)
//!
//! Checkout fields also accept the snake_case names older storefront
//! builds send (`first_name`, `pincode`, `Price1`, ...).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::checkout::{CartLineInput, CheckoutInput};
use crate::domain::entities::{Order, OrderItem};
use crate::domain::value_objects::OrderStatus;

/// Request for POST /api/orders
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutRequest {
    #[serde(alias = "first_name")]
    pub first_name: Option<Value>,
    #[serde(alias = "last_name")]
    pub last_name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub address: Option<Value>,
    #[serde(alias = "pincode", alias = "postal_code")]
    pub postal_code: Option<Value>,
    pub subtotal: Option<Value>,
    pub shipping: Option<Value>,
    pub tax: Option<Value>,
    pub total: Option<Value>,
    #[serde(alias = "payment_method")]
    pub payment_method: Option<Value>,
    #[serde(alias = "payment_status")]
    pub payment_status: Option<Value>,
    #[serde(alias = "payment_id", alias = "paymentReference")]
    pub payment_id: Option<Value>,
    pub cart: Option<Vec<CartItemRequest>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CartItemRequest {
    #[serde(alias = "productId")]
    pub id: Option<Value>,
    pub name: Option<Value>,
    #[serde(alias = "quantity")]
    pub qty: Option<Value>,
    #[serde(alias = "Price1")]
    pub price: Option<Value>,
    pub images: Option<Vec<String>>,
}

/// Text form of a JSON scalar; `null` and absence are both `None`
///
/// Non-scalar values keep their JSON text so that validation reports them
/// as malformed rather than missing.
fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn quantity(value: Option<Value>) -> Option<i64> {
    match value? {
        Value::Null => None,
        Value::Number(n) => Some(n.as_i64().unwrap_or(0)),
        Value::String(s) => Some(s.trim().parse().unwrap_or(0)),
        _ => Some(0),
    }
}

impl From<CartItemRequest> for CartLineInput {
    fn from(req: CartItemRequest) -> Self {
        Self {
            product_id: scalar_text(req.id),
            name: scalar_text(req.name).unwrap_or_default(),
            quantity: quantity(req.qty),
            price: scalar_text(req.price),
            images: req.images.unwrap_or_default(),
        }
    }
}

impl From<CheckoutRequest> for CheckoutInput {
    fn from(req: CheckoutRequest) -> Self {
        Self {
            first_name: scalar_text(req.first_name).unwrap_or_default(),
            last_name: scalar_text(req.last_name).unwrap_or_default(),
            email: scalar_text(req.email).unwrap_or_default(),
            phone: scalar_text(req.phone).unwrap_or_default(),
            address: scalar_text(req.address).unwrap_or_default(),
            postal_code: scalar_text(req.postal_code).unwrap_or_default(),
            subtotal: scalar_text(req.subtotal),
            shipping: scalar_text(req.shipping),
            tax: scalar_text(req.tax),
            total: scalar_text(req.total),
            payment_method: scalar_text(req.payment_method),
            payment_status: scalar_text(req.payment_status),
            payment_reference: scalar_text(req.payment_id),
            cart: req
                .cart
                .unwrap_or_default()
                .into_iter()
                .map(CartLineInput::from)
                .collect(),
        }
    }
}

/// Response for POST /api/orders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: i64,
}

/// Query for GET /api/orders
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub email: Option<String>,
}

/// Request for PUT /api/orders/{id}/status
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteOrderResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub payment_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i64,
    pub order_id: i64,
    pub product_id: Option<String>,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub image_url: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id.as_i64(),
            order_id: item.order_id.as_i64(),
            product_id: item.product_id,
            name: item.name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            image_url: item.image_url,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.as_i64(),
            first_name: order.customer.first_name,
            last_name: order.customer.last_name,
            email: order.customer.email.into_db(),
            phone: order.customer.phone,
            address: order.customer.address,
            postal_code: order.customer.postal_code,
            subtotal: order.totals.subtotal,
            shipping: order.totals.shipping,
            tax: order.totals.tax,
            total: order.totals.total,
            payment_method: order.payment.method,
            payment_status: order.payment.status,
            payment_id: order.payment.reference,
            status: order.status,
            created_at: order.created_at,
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_payload_shape() {
        let req: CheckoutRequest = serde_json::from_value(json!({
            "first_name": "Asha",
            "pincode": 560001,
            "email": "asha@example.com",
            "subtotal": 100, "shipping": "0", "tax": 0, "total": "100",
            "payment_id": "pay_123",
            "cart": [{ "id": 1, "name": "Mug", "qty": 2, "Price1": "₹50", "images": ["m.png"] }]
        }))
        .unwrap();

        let input = CheckoutInput::from(req);
        assert_eq!(input.first_name, "Asha");
        assert_eq!(input.postal_code, "560001");
        assert_eq!(input.subtotal.as_deref(), Some("100"));
        assert_eq!(input.payment_reference.as_deref(), Some("pay_123"));
        assert_eq!(input.cart[0].product_id.as_deref(), Some("1"));
        assert_eq!(input.cart[0].quantity, Some(2));
        assert_eq!(input.cart[0].price.as_deref(), Some("₹50"));
    }

    #[test]
    fn test_null_total_is_missing_and_object_is_malformed() {
        let req: CheckoutRequest =
            serde_json::from_value(json!({ "total": null, "tax": {"a": 1} })).unwrap();
        let input = CheckoutInput::from(req);
        assert_eq!(input.total, None);
        assert!(input.tax.is_some());
    }

    #[test]
    fn test_bad_quantity_is_not_defaulted() {
        let item: CartItemRequest =
            serde_json::from_value(json!({ "name": "Mug", "qty": "two" })).unwrap();
        assert_eq!(CartLineInput::from(item).quantity, Some(0));
    }
}
