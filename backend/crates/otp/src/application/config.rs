//! Application Configuration

use std::time::Duration;

/// OTP application configuration
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Lifetime of an issued code
    pub code_ttl: Duration,
    /// Number of decimal digits in a code
    pub code_length: usize,
    /// Deadline for each store call
    pub store_timeout: Duration,
    /// Deadline for handing a message to the mail relay
    pub mail_timeout: Duration,
    pub mail_subject: String,
    /// Verification attempts allowed per issued code
    pub max_attempts: u32,
    /// Application-wide pepper appended before hashing passwords
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::from_secs(300),
            code_length: 6,
            store_timeout: Duration::from_secs(5),
            mail_timeout: Duration::from_secs(10),
            mail_subject: "Password Reset OTP".to_string(),
            max_attempts: 5,
            password_pepper: None,
        }
    }
}

impl OtpConfig {
    /// Short deadlines so tests fail fast
    pub fn development() -> Self {
        Self {
            store_timeout: Duration::from_secs(1),
            mail_timeout: Duration::from_secs(1),
            ..Default::default()
        }
    }

    /// Saturates instead of wrapping; callers bound the TTL at startup
    pub fn code_ttl_ms(&self) -> i64 {
        i64::try_from(self.code_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn mail_body(&self, code: &str) -> String {
        format!(
            "Your OTP for password reset is {}. It will expire in {} minutes.",
            code,
            self.code_ttl.as_secs().div_ceil(60)
        )
    }
}
