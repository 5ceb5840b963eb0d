//! Payment Module - Gateway order creation
//!
//! - `domain/` - Minor-unit amounts, currency, the `PaymentGateway` seam
//! - `application/` - Create-order use case
//! - `infra/` - Razorpay Orders API over reqwest
//! - `presentation/` - HTTP handler

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::PaymentConfig;
pub use domain::gateway::PaymentGateway;
pub use error::{PaymentError, PaymentResult};
pub use infra::razorpay::{RazorpayGateway, RazorpaySettings};
pub use presentation::router::{payment_router, payment_router_generic};

#[cfg(test)]
mod tests;
