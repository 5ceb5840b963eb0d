//! Process configuration read from the environment
//!
//! `.env` is loaded by `main` before this runs. Required options fail
//! startup with a message naming the variable.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use payment::infra::razorpay::DEFAULT_API_BASE;
use payment::{PaymentConfig, RazorpaySettings};
use platform::mail::SmtpSettings;
use secrecy::{ExposeSecret, SecretString};

/// Upper bound for a reset code's lifetime
const MAX_OTP_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub store_timeout: Duration,
    pub mail_timeout: Duration,
    pub smtp: SmtpSettings,
    pub otp_ttl: Duration,
    pub otp_code_length: usize,
    pub otp_max_attempts: u32,
    pub otp_cleanup_interval: Duration,
    pub razorpay: RazorpaySettings,
    pub default_currency: String,
    pub password_pepper: Option<SecretString>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env = Env(&lookup);

        let smtp_username = env.required("SMTP_USERNAME")?;
        let from_address = env.optional("MAIL_FROM").unwrap_or_else(|| smtp_username.clone());
        let payment_timeout = env.millis("PAYMENT_TIMEOUT_MS", 10_000)?;

        Ok(Self {
            database_url: SecretString::from(env.required("DATABASE_URL")?),
            bind_addr: env.parsed("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 5000)))?,
            frontend_origins: env
                .optional("FRONTEND_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000,http://127.0.0.1:3000".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            db_max_connections: env.parsed("DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: env.millis("DB_ACQUIRE_TIMEOUT_MS", 10_000)?,
            store_timeout: env.millis("STORE_TIMEOUT_MS", 5_000)?,
            mail_timeout: env.millis("MAIL_TIMEOUT_MS", 10_000)?,
            smtp: SmtpSettings {
                host: env.optional("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                port: env.parsed("SMTP_PORT", 587)?,
                username: smtp_username,
                password: SecretString::from(env.required("SMTP_PASSWORD")?),
                from_address,
            },
            otp_ttl: Duration::from_secs(env.parsed("OTP_TTL_SECS", 300)?),
            otp_code_length: env.parsed("OTP_CODE_LENGTH", 6)?,
            otp_max_attempts: env.parsed("OTP_MAX_ATTEMPTS", 5)?,
            otp_cleanup_interval: Duration::from_secs(
                env.parsed("OTP_CLEANUP_INTERVAL_SECS", 600)?,
            ),
            razorpay: RazorpaySettings {
                key_id: env.required("RAZORPAY_KEY_ID")?,
                key_secret: SecretString::from(env.required("RAZORPAY_KEY_SECRET")?),
                api_base: env
                    .optional("RAZORPAY_API_BASE")
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout: payment_timeout,
            },
            default_currency: env
                .optional("DEFAULT_CURRENCY")
                .unwrap_or_else(|| PaymentConfig::default().default_currency),
            password_pepper: env.optional("PASSWORD_PEPPER").map(SecretString::from),
        })
        .and_then(Self::validated)
    }

    fn validated(self) -> anyhow::Result<Self> {
        if !(4..=10).contains(&self.otp_code_length) {
            return Err(anyhow!("OTP_CODE_LENGTH must be between 4 and 10"));
        }
        if self.otp_ttl.is_zero() || self.otp_ttl > MAX_OTP_TTL {
            return Err(anyhow!(
                "OTP_TTL_SECS must be between 1 and {}",
                MAX_OTP_TTL.as_secs()
            ));
        }
        if self.otp_max_attempts == 0 {
            return Err(anyhow!("OTP_MAX_ATTEMPTS must be positive"));
        }
        if self.otp_cleanup_interval.is_zero() {
            return Err(anyhow!("OTP_CLEANUP_INTERVAL_SECS must be positive"));
        }
        Ok(self)
    }

    pub fn pepper_bytes(&self) -> Option<Vec<u8>> {
        self.password_pepper
            .as_ref()
            .map(|p| p.expose_secret().as_bytes().to_vec())
    }

    pub fn order_config(&self) -> orders::OrderConfig {
        orders::OrderConfig {
            store_timeout: self.store_timeout,
        }
    }

    pub fn otp_config(&self) -> otp::OtpConfig {
        otp::OtpConfig {
            code_ttl: self.otp_ttl,
            code_length: self.otp_code_length,
            max_attempts: self.otp_max_attempts,
            store_timeout: self.store_timeout,
            mail_timeout: self.mail_timeout,
            password_pepper: self.pepper_bytes(),
            ..otp::OtpConfig::default()
        }
    }

    pub fn auth_config(&self) -> auth::AuthConfig {
        auth::AuthConfig {
            store_timeout: self.store_timeout,
            password_pepper: self.pepper_bytes(),
        }
    }

    pub fn contact_config(&self) -> contact::ContactConfig {
        contact::ContactConfig {
            store_timeout: self.store_timeout,
        }
    }

    pub fn payment_config(&self) -> PaymentConfig {
        PaymentConfig {
            default_currency: self.default_currency.clone(),
            gateway_timeout: self.razorpay.timeout,
        }
    }
}

struct Env<'a, F: Fn(&str) -> Option<String>>(&'a F);

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    /// Unset and blank are the same
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &str) -> anyhow::Result<String> {
        self.optional(key)
            .ok_or_else(|| anyhow!("{key} must be set in environment"))
    }

    fn parsed<T>(&self, key: &str, default: T) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.optional(key) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{key} has an invalid value: {raw}")),
            None => Ok(default),
        }
    }

    fn millis(&self, key: &str, default_ms: u64) -> anyhow::Result<Duration> {
        self.parsed(key, default_ms).map(Duration::from_millis)
    }
}
