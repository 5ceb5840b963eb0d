//! Payment Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::PaymentConfig;
use crate::domain::gateway::PaymentGateway;
use crate::infra::razorpay::RazorpayGateway;
use crate::presentation::handlers::{self, PaymentAppState};

/// Create the payment router backed by Razorpay
pub fn payment_router(gateway: RazorpayGateway, config: PaymentConfig) -> Router {
    payment_router_generic(gateway, config)
}

/// Create a generic payment router for any gateway implementation
pub fn payment_router_generic<G>(gateway: G, config: PaymentConfig) -> Router
where
    G: PaymentGateway + Send + Sync + 'static,
{
    let state = PaymentAppState {
        gateway: Arc::new(gateway),
        config: Arc::new(config),
    };

    Router::new()
        .route("/orders", post(handlers::create_payment_order::<G>))
        .with_state(state)
}
