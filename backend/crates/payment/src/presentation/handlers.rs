//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use crate::application::config::PaymentConfig;
use crate::application::create_order::CreatePaymentOrderUseCase;
use crate::domain::gateway::PaymentGateway;
use crate::error::{PaymentError, PaymentResult};
use crate::presentation::dto::CreatePaymentOrderRequest;

pub struct PaymentAppState<G>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub config: Arc<PaymentConfig>,
}

impl<G> Clone for PaymentAppState<G>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/payment/orders
///
/// The gateway's order document is passed through as-is.
pub async fn create_payment_order<G>(
    State(state): State<PaymentAppState<G>>,
    payload: Result<Json<CreatePaymentOrderRequest>, JsonRejection>,
) -> PaymentResult<Json<Value>>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| PaymentError::InvalidAmount(e.body_text()))?;

    let use_case = CreatePaymentOrderUseCase::new(state.gateway.clone(), state.config.clone());
    let order = use_case
        .execute(&req.amount_text(), req.currency.as_deref())
        .await?;

    Ok(Json(order))
}
