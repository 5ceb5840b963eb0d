//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Order, OrderItem, NewOrder)
//! - Value objects (OrderStatus, money parsing)
//! - Checkout validation (raw cart -> NewOrder)
//! - Repository traits (interfaces)

pub mod checkout;
pub mod entities;
pub mod repository;
pub mod value_objects;
