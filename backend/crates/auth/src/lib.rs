//! Auth Module - Customer and Admin Accounts
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (sign up, sign in, change password, admin management)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! ## Credentials
//! Passwords are stored as Argon2id PHC strings and only ever compared
//! through the hash. Unknown email and wrong password produce the same 401.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::AuthConfig;
pub use domain::repository::{AdminRepository, CustomerRepository};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

#[cfg(test)]
mod tests;
