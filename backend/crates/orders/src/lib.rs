//! Order Capture Module
//!
//! Clean Architecture structure:
//! - `domain/` - Order entities, status, checkout validation, repository trait
//! - `application/` - Place, query, update-status and delete use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! ## Capture
//! Validation runs entirely before the first write. The order header and
//! every item are then written in one transaction: either the whole
//! order is stored or nothing is.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::OrderConfig;
pub use domain::repository::OrderRepository;
pub use domain::value_objects::OrderStatus;
pub use error::{OrderError, OrderResult};
pub use infra::memory::InMemoryOrderRepository;
pub use infra::postgres::PgOrderRepository;
pub use presentation::router::{order_router, order_router_generic};
