//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, constant-time compare, numeric codes)
//! - Password hashing (Argon2id, NIST SP 800-63B style policy)
//! - Outbound mail (`MailSender` seam + lettre SMTP)
//! - Deadlines for store and network calls

pub mod crypto;
pub mod deadline;
pub mod mail;
pub mod password;
