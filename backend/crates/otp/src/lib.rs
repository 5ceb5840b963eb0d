//! OTP Password-Reset Module
//!
//! Clean Architecture structure:
//! - `domain/` - Challenge entity, code value object, repository traits
//! - `application/` - Request, verify and commit use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! ## Protocol
//! Per email: `NONE -> ISSUED -> VERIFIED -> (consumed) NONE`.
//! - A new request supersedes any earlier challenge for the same email
//! - Expiry is enforced on verify *and* on commit
//! - A commit attempt always consumes the challenge
//! - Codes are stored as SHA-256 digests and never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::cleanup::CleanupExpiredUseCase;
pub use application::config::OtpConfig;
pub use domain::repository::{OtpChallengeRepository, UserPasswordRepository};
pub use error::{OtpError, OtpResult};
pub use infra::memory::InMemoryOtpRepository;
pub use infra::postgres::PgOtpRepository;
pub use presentation::router::{otp_router, otp_router_generic};
