//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (OtpChallenge)
//! - Value objects (OtpCode)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
