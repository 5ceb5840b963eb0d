//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use kernel::id::{AdminId, UserId};

use crate::application::admins::{
    AdminSignInUseCase, CreateAdminUseCase, DeleteAdminUseCase, ListAdminsUseCase,
};
use crate::application::change_password::{ChangePasswordInput, ChangePasswordUseCase};
use crate::application::config::AuthConfig;
use crate::application::sign_in::SignInUseCase;
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::application::users::{DeleteUserUseCase, ListUsersUseCase};
use crate::domain::repository::{AdminRepository, CustomerRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AdminLoginResponse, AdminResponse, ChangePasswordRequest, CreateAdminResponse, LoginRequest,
    LoginResponse, MessageResponse, SignUpRequest, SignUpResponse, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| AuthError::Validation(e.body_text()))
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> AuthResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| AuthError::Validation("id must be an integer".to_string()))
}

// ============================================================================
// Customers
// ============================================================================

/// POST /api/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<Json<SignUpResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let req = body(payload)?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    let user_id = use_case
        .execute(SignUpInput {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            password: req.password,
        })
        .await?;

    Ok(Json(SignUpResponse {
        success: true,
        message: "User registered successfully",
        user_id: user_id.as_i64(),
    }))
}

/// POST /api/login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let req = body(payload)?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let profile = use_case.execute(&req.email, req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        logged_in_user: profile.into(),
    }))
}

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let users = ListUsersUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let id = UserId::from_i64(path_id(path)?);
    DeleteUserUseCase::new(state.repo.clone(), state.config.clone())
        .execute(id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "User deleted successfully",
    }))
}

/// PUT /api/change-password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let req = body(payload)?;

    ChangePasswordUseCase::new(state.repo.clone(), state.config.clone())
        .execute(ChangePasswordInput {
            email: req.email,
            old_password: req.old_password,
            new_password: req.new_password,
        })
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Password updated successfully",
    }))
}

// ============================================================================
// Admins
// ============================================================================

/// POST /api/admin/login
pub async fn admin_sign_in<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<AdminLoginResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let req = body(payload)?;

    let admin = AdminSignInUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&req.email, req.password)
        .await?;

    Ok(Json(AdminLoginResponse {
        success: true,
        admin: admin.into(),
    }))
}

/// GET /api/admins
pub async fn list_admins<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<AdminResponse>>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let admins = ListAdminsUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;
    Ok(Json(admins.into_iter().map(AdminResponse::from).collect()))
}

/// POST /api/admins
pub async fn create_admin<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<CreateAdminResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let req = body(payload)?;

    let admin = CreateAdminUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&req.email, req.password)
        .await?;

    Ok(Json(CreateAdminResponse {
        success: true,
        admin: admin.into(),
    }))
}

/// DELETE /api/admins/{id}
pub async fn delete_admin<R>(
    State(state): State<AuthAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: CustomerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let id = AdminId::from_i64(path_id(path)?);
    DeleteAdminUseCase::new(state.repo.clone(), state.config.clone())
        .execute(id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Admin deleted successfully",
    }))
}
