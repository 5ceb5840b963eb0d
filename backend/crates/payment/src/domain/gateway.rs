//! Payment Gateway Seam

use serde::Serialize;
use serde_json::Value;

use crate::domain::value_objects::{Currency, MinorAmount};
use crate::error::PaymentResult;

/// Order to register with the gateway before checkout opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayOrderRequest {
    pub amount: MinorAmount,
    pub currency: Currency,
    pub receipt: String,
}

#[trait_variant::make(PaymentGateway: Send)]
pub trait LocalPaymentGateway {
    /// Returns the gateway's order document unchanged
    async fn create_order(&self, request: &GatewayOrderRequest) -> PaymentResult<Value>;
}
