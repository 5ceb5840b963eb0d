//! Customer Entity

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::person_name::PersonName;

/// Customer account as exposed to callers (no credential)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl CustomerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile plus the stored password hash, for sign-in checks only
#[derive(Debug, Clone)]
pub struct CustomerCredential {
    pub profile: CustomerProfile,
    pub password_hash: HashedPassword,
}

/// Validated sign-up, ready to insert
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub password_hash: HashedPassword,
}
