//! Admin Entity

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::AdminId;
use platform::password::HashedPassword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub admin: Admin,
    pub password_hash: HashedPassword,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: Email,
    pub password_hash: HashedPassword,
}
