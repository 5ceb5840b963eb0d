//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::admin::Admin;
use crate::domain::entity::customer::CustomerProfile;

// ============================================================================
// Customers
// ============================================================================

/// Request for POST /api/signup
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    #[serde(alias = "first_name")]
    pub first_name: String,
    #[serde(alias = "last_name")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

/// Response for POST /api/signup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: i64,
}

/// Request for POST /api/login and POST /api/admin/login
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for POST /api/login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub logged_in_user: LoggedInUser,
}

#[derive(Debug, Serialize)]
pub struct LoggedInUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<CustomerProfile> for LoggedInUser {
    fn from(profile: CustomerProfile) -> Self {
        Self {
            id: profile.id.as_i64(),
            name: profile.full_name(),
            email: profile.email.into_db(),
            phone: profile.phone,
            address: profile.address,
        }
    }
}

/// Element of GET /api/users
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerProfile> for UserResponse {
    fn from(profile: CustomerProfile) -> Self {
        Self {
            id: profile.id.as_i64(),
            first_name: profile.first_name.into_inner(),
            last_name: profile.last_name.into_inner(),
            email: profile.email.into_db(),
            phone: profile.phone,
            address: profile.address,
            created_at: profile.created_at,
        }
    }
}

/// Request for PUT /api/change-password
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    pub email: String,
    #[serde(alias = "old_password")]
    pub old_password: String,
    #[serde(alias = "new_password")]
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

// ============================================================================
// Admins
// ============================================================================

/// Response for POST /api/admin/login
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub admin: AdminSummary,
}

#[derive(Debug, Serialize)]
pub struct AdminSummary {
    pub id: i64,
    pub email: String,
}

impl From<Admin> for AdminSummary {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.as_i64(),
            email: admin.email.into_db(),
        }
    }
}

/// Element of GET /api/admins
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.as_i64(),
            email: admin.email.into_db(),
            created_at: admin.created_at,
        }
    }
}

/// Response for POST /api/admins
#[derive(Debug, Serialize)]
pub struct CreateAdminResponse {
    pub success: bool,
    pub admin: AdminResponse,
}
