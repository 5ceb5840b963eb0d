//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Request for POST /api/otp/request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOtpRequest {
    #[serde(default, alias = "toEmail")]
    pub email: String,
}

/// Request for POST /api/otp/verify
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "otp")]
    pub code: String,
}

/// Request for POST /api/otp/commit
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPasswordRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "newPassword")]
    pub password: String,
}

impl std::fmt::Debug for CommitPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitPasswordRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOtpResponse {
    pub success: bool,
    pub message: &'static str,
    pub expires_at_ms: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
    pub message: &'static str,
}

impl VerifyOtpResponse {
    pub fn accepted() -> Self {
        Self {
            verified: true,
            message: "OTP verified",
        }
    }

    /// The single response for every verification failure
    pub fn rejected() -> Self {
        Self {
            verified: false,
            message: "Invalid or expired OTP",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitPasswordResponse {
    pub success: bool,
    pub message: &'static str,
}
