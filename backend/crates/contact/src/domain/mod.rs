//! Domain Layer
//!
//! - Entities (ContactMessage, Subscriber)
//! - Repository traits

pub mod entities;
pub mod repository;
