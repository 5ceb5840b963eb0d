//! Payment Value Objects

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PaymentError, PaymentResult};

/// Amount in the currency's minor unit (paise for INR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MinorAmount(i64);

impl MinorAmount {
    /// Convert a positive major-unit amount (`"499.50"`) to minor units
    ///
    /// Fractions of a minor unit are rejected rather than rounded.
    pub fn from_major(major: Decimal) -> PaymentResult<Self> {
        if major <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }

        let minor = major
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| PaymentError::InvalidAmount("amount is too large".to_string()))?
            .normalize();
        if minor.scale() != 0 {
            return Err(PaymentError::InvalidAmount(
                "amount has more than two decimal places".to_string(),
            ));
        }

        i64::try_from(minor)
            .map(Self)
            .map_err(|_| PaymentError::InvalidAmount("amount is too large".to_string()))
    }

    /// Parse the text form of a major-unit amount
    pub fn parse_major(raw: &str) -> PaymentResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PaymentError::InvalidAmount("amount is required".to_string()));
        }
        let major = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| PaymentError::InvalidAmount("amount must be a number".to_string()))?;
        Self::from_major(major)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ISO 4217 alphabetic code, upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(raw: &str) -> PaymentResult<Self> {
        let code = raw.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PaymentError::InvalidCurrency);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_to_minor() {
        assert_eq!(MinorAmount::parse_major("499").unwrap().as_i64(), 49_900);
        assert_eq!(MinorAmount::parse_major("499.5").unwrap().as_i64(), 49_950);
        assert_eq!(MinorAmount::parse_major(" 0.01 ").unwrap().as_i64(), 1);
        assert_eq!(MinorAmount::parse_major("12.340").unwrap().as_i64(), 1_234);
    }

    #[test]
    fn test_rejects_sub_minor_fractions() {
        assert!(MinorAmount::parse_major("10.005").is_err());
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        assert!(MinorAmount::parse_major("0").is_err());
        assert!(MinorAmount::parse_major("-5").is_err());
        assert!(MinorAmount::parse_major("five").is_err());
        assert!(MinorAmount::parse_major("").is_err());
    }

    #[test]
    fn test_currency() {
        assert_eq!(Currency::new("inr").unwrap().as_str(), "INR");
        assert!(Currency::new("RUPEES").is_err());
        assert!(Currency::new("U$D").is_err());
    }
}
