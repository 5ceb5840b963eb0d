//! API DTOs

use serde::Deserialize;
use serde_json::Value;

/// Request for POST /api/payment/orders
///
/// `amount` may arrive as a JSON number or a numeric string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePaymentOrderRequest {
    pub amount: Option<Value>,
    pub currency: Option<String>,
}

impl CreatePaymentOrderRequest {
    /// Text form of `amount`; empty when absent so validation reports it
    pub fn amount_text(&self) -> String {
        match &self.amount {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
