//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases (RFC 7807 rendering)
//! - Store error classification shared by every repository
//! - Typed ID wrappers for store-assigned and generated identifiers
//! - The validated `Email` value object every feature keys on
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod email;
pub mod id;
