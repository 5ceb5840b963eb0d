//! Application Configuration

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Used when the request names no currency
    pub default_currency: String,
    /// Deadline for the whole gateway round trip
    pub gateway_timeout: Duration,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            default_currency: "INR".to_string(),
            gateway_timeout: Duration::from_secs(10),
        }
    }
}

impl PaymentConfig {
    pub fn development() -> Self {
        Self {
            gateway_timeout: Duration::from_secs(1),
            ..Default::default()
        }
    }
}
