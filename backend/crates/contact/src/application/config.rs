//! Application Configuration

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Deadline for each store call
    pub store_timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl ContactConfig {
    pub fn development() -> Self {
        Self {
            store_timeout: Duration::from_secs(1),
        }
    }
}
