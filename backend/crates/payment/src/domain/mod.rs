//! Domain Layer
//!
//! - Value objects (MinorAmount, Currency)
//! - The gateway order request
//! - The `PaymentGateway` seam

pub mod gateway;
pub mod value_objects;
