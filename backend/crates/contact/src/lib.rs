//! Contact Module - Contact messages and newsletter subscribers
//!
//! Same layering as the other feature crates:
//! `domain/`, `application/`, `infra/`, `presentation/`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::ContactConfig;
pub use domain::repository::{ContactRepository, SubscriberRepository};
pub use error::{ContactError, ContactResult};
pub use infra::memory::InMemoryContactRepository;
pub use infra::postgres::PgContactRepository;
pub use presentation::router::{contact_router, contact_router_generic};
