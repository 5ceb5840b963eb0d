//! OTP Router

use std::sync::Arc;

use axum::{Router, routing::post};
use platform::mail::{MailSender, SmtpMailer};

use crate::application::config::OtpConfig;
use crate::domain::repository::{OtpChallengeRepository, UserPasswordRepository};
use crate::infra::postgres::PgOtpRepository;
use crate::presentation::handlers::{self, OtpAppState};

/// Create the OTP router with PostgreSQL repository and SMTP delivery
pub fn otp_router(repo: PgOtpRepository, mailer: SmtpMailer, config: OtpConfig) -> Router {
    otp_router_generic(repo, mailer, config)
}

/// Create a generic OTP router for any repository and mail sender
pub fn otp_router_generic<R, M>(repo: R, mailer: M, config: OtpConfig) -> Router
where
    R: OtpChallengeRepository + UserPasswordRepository + Clone + Send + Sync + 'static,
    M: MailSender + Send + Sync + 'static,
{
    let state = OtpAppState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/request", post(handlers::request_otp::<R, M>))
        .route("/verify", post(handlers::verify_otp::<R, M>))
        .route("/commit", post(handlers::commit_password::<R, M>))
        .with_state(state)
}
