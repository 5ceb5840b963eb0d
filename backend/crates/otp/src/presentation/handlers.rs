//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use platform::mail::MailSender;

use crate::application::commit_password::CommitPasswordUseCase;
use crate::application::config::OtpConfig;
use crate::application::request_otp::RequestOtpUseCase;
use crate::application::verify_otp::VerifyOtpUseCase;
use crate::domain::repository::{OtpChallengeRepository, UserPasswordRepository};
use crate::error::{OtpError, OtpResult};
use crate::presentation::dto::{
    CommitPasswordRequest, CommitPasswordResponse, RequestOtpRequest, RequestOtpResponse,
    VerifyOtpRequest, VerifyOtpResponse,
};

/// Shared state for OTP handlers
pub struct OtpAppState<R, M>
where
    R: OtpChallengeRepository + UserPasswordRepository + Clone + Send + Sync + 'static,
    M: MailSender + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub config: Arc<OtpConfig>,
}

impl<R, M> Clone for OtpAppState<R, M>
where
    R: OtpChallengeRepository + UserPasswordRepository + Clone + Send + Sync + 'static,
    M: MailSender + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            mailer: self.mailer.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/otp/request
pub async fn request_otp<R, M>(
    State(state): State<OtpAppState<R, M>>,
    payload: Result<Json<RequestOtpRequest>, JsonRejection>,
) -> OtpResult<Json<RequestOtpResponse>>
where
    R: OtpChallengeRepository + UserPasswordRepository + Clone + Send + Sync + 'static,
    M: MailSender + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| OtpError::InvalidEmail(e.body_text()))?;

    let use_case =
        RequestOtpUseCase::new(state.repo.clone(), state.mailer.clone(), state.config.clone());
    let output = use_case.execute(&req.email).await?;

    Ok(Json(RequestOtpResponse {
        success: true,
        message: "OTP sent successfully",
        expires_at_ms: output.expires_at_ms,
    }))
}

/// POST /api/otp/verify
///
/// A malformed body is one more way for verification to fail, so it gets
/// the same 200 answer as a wrong code.
pub async fn verify_otp<R, M>(
    State(state): State<OtpAppState<R, M>>,
    payload: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> OtpResult<Json<VerifyOtpResponse>>
where
    R: OtpChallengeRepository + UserPasswordRepository + Clone + Send + Sync + 'static,
    M: MailSender + Send + Sync + 'static,
{
    let Ok(Json(req)) = payload else {
        return Ok(Json(VerifyOtpResponse::rejected()));
    };

    let use_case = VerifyOtpUseCase::new(state.repo.clone(), state.config.clone());
    let verified = use_case.execute(&req.email, &req.code).await?;

    Ok(Json(if verified {
        VerifyOtpResponse::accepted()
    } else {
        VerifyOtpResponse::rejected()
    }))
}

/// POST /api/otp/commit
pub async fn commit_password<R, M>(
    State(state): State<OtpAppState<R, M>>,
    payload: Result<Json<CommitPasswordRequest>, JsonRejection>,
) -> OtpResult<Json<CommitPasswordResponse>>
where
    R: OtpChallengeRepository + UserPasswordRepository + Clone + Send + Sync + 'static,
    M: MailSender + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| OtpError::InvalidEmail(e.body_text()))?;

    let use_case =
        CommitPasswordUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    use_case.execute(&req.email, req.password).await?;

    Ok(Json(CommitPasswordResponse {
        success: true,
        message: "Password updated successfully",
    }))
}
