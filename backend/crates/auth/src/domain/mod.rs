//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (CustomerProfile, Admin and their credentials)
//! - Value objects (PersonName)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
pub mod value_object;
