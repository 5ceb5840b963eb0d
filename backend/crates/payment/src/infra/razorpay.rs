//! Razorpay Orders API client

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::domain::gateway::{GatewayOrderRequest, PaymentGateway};
use crate::error::{PaymentError, PaymentResult};

pub const DEFAULT_API_BASE: &str = "https://api.razorpay.com";

/// Razorpay API credentials and endpoint
#[derive(Clone)]
pub struct RazorpaySettings {
    pub key_id: String,
    pub key_secret: SecretString,
    pub api_base: String,
    /// Per-request timeout enforced by the HTTP client
    pub timeout: Duration,
}

impl std::fmt::Debug for RazorpaySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpaySettings")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone)]
pub struct RazorpayGateway {
    client: Client,
    settings: RazorpaySettings,
}

impl RazorpayGateway {
    pub fn new(settings: RazorpaySettings) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| PaymentError::Internal(format!("HTTP client: {e}")))?;
        Ok(Self { client, settings })
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.settings.api_base.trim_end_matches('/'))
    }
}

impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: &GatewayOrderRequest) -> PaymentResult<Value> {
        let response = self
            .client
            .post(self.orders_url())
            .basic_auth(
                &self.settings.key_id,
                Some(self.settings.key_secret.expose_secret()),
            )
            .json(request)
            .send()
            .await
            .map_err(|e| PaymentError::GatewayUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PaymentError::GatewayRejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PaymentError::GatewayUnreachable(e.to_string()))
    }
}
