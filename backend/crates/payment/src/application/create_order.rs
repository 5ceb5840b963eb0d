//! Create Payment Order Use Case
//!
//! Registers an order with the gateway so the storefront can open its
//! checkout widget. Nothing is persisted locally.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::application::config::PaymentConfig;
use crate::domain::gateway::{GatewayOrderRequest, PaymentGateway};
use crate::domain::value_objects::{Currency, MinorAmount};
use crate::error::{PaymentError, PaymentResult};

pub struct CreatePaymentOrderUseCase<G>
where
    G: PaymentGateway,
{
    gateway: Arc<G>,
    config: Arc<PaymentConfig>,
}

impl<G> CreatePaymentOrderUseCase<G>
where
    G: PaymentGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<PaymentConfig>) -> Self {
        Self { gateway, config }
    }

    /// `amount` is in major units as text; `currency` falls back to the default
    pub async fn execute(&self, amount: &str, currency: Option<&str>) -> PaymentResult<Value> {
        let amount = MinorAmount::parse_major(amount)?;
        let currency = match currency.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => Currency::new(code)?,
            None => Currency::new(&self.config.default_currency)?,
        };

        let request = GatewayOrderRequest {
            amount,
            currency,
            receipt: format!("receipt_{}", Utc::now().timestamp_millis()),
        };

        let order = platform::deadline::bounded(
            self.config.gateway_timeout,
            self.gateway.create_order(&request),
        )
        .await
        .map_err(|_| PaymentError::GatewayTimeout)??;

        tracing::info!(
            amount = request.amount.as_i64(),
            currency = %request.currency,
            receipt = %request.receipt,
            "Payment order created"
        );
        Ok(order)
    }
}
