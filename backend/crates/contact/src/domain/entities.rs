//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::{ContactId, SubscriberId};

use crate::error::{ContactError, ContactResult};

/// A storefront contact-form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub message: String,
}

impl NewContactMessage {
    /// Every field is required; surrounding whitespace is dropped
    pub fn parse(
        first_name: &str,
        last_name: &str,
        email: &str,
        message: &str,
    ) -> ContactResult<Self> {
        let required = |value: &str| -> ContactResult<String> {
            let value = value.trim();
            if value.is_empty() {
                return Err(ContactError::Validation("All fields are required".to_string()));
            }
            Ok(value.to_string())
        };

        let first_name = required(first_name)?;
        let last_name = required(last_name)?;
        let message = required(message)?;
        let email = Email::new(email).map_err(|e| ContactError::Validation(e.message().to_string()))?;

        Ok(Self {
            first_name,
            last_name,
            email,
            message,
        })
    }
}

/// Newsletter subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}
