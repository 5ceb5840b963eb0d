//! Application Configuration

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OrderConfig {
    /// Deadline for each store call (a whole capture transaction counts as one)
    pub store_timeout: Duration,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl OrderConfig {
    pub fn development() -> Self {
        Self {
            store_timeout: Duration::from_secs(1),
        }
    }
}
