//! Application Configuration

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Deadline for each store call
    pub store_timeout: Duration,
    /// Application-wide pepper appended before hashing passwords
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    pub fn development() -> Self {
        Self {
            store_timeout: Duration::from_secs(1),
            ..Default::default()
        }
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
