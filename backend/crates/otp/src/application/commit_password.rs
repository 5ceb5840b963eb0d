//! Commit Password Use Case (`VERIFIED -> NONE`)

use std::sync::Arc;

use kernel::email::Email;
use platform::password::ClearTextPassword;

use crate::application::config::OtpConfig;
use crate::application::{now_ms, store_call};
use crate::domain::repository::{OtpChallengeRepository, UserPasswordRepository};
use crate::error::{OtpError, OtpResult};

pub struct CommitPasswordUseCase<C, U>
where
    C: OtpChallengeRepository,
    U: UserPasswordRepository,
{
    challenge_repo: Arc<C>,
    user_repo: Arc<U>,
    config: Arc<OtpConfig>,
}

impl<C, U> CommitPasswordUseCase<C, U>
where
    C: OtpChallengeRepository,
    U: UserPasswordRepository,
{
    pub fn new(challenge_repo: Arc<C>, user_repo: Arc<U>, config: Arc<OtpConfig>) -> Self {
        Self {
            challenge_repo,
            user_repo,
            config,
        }
    }

    pub async fn execute(&self, email: &str, new_password: String) -> OtpResult<()> {
        let email = Email::new(email).map_err(|e| OtpError::InvalidEmail(e.message().to_string()))?;

        // Policy is checked before the challenge is touched so that a typo in
        // the new password does not burn a verified code.
        let password = ClearTextPassword::new(new_password)
            .map_err(|e| OtpError::InvalidPassword(e.to_string()))?;

        // Every commit attempt burns the challenge, whatever its state.
        let challenge = store_call(self.config.store_timeout, self.challenge_repo.consume(&email))
            .await?
            .ok_or(OtpError::NoActiveChallenge)?;

        if !challenge.authorises_commit(now_ms()) {
            return Err(OtpError::NotVerified);
        }

        let hashed = password
            .hash(self.config.pepper())
            .map_err(|e| OtpError::Internal(e.to_string()))?;

        let updated = store_call(
            self.config.store_timeout,
            self.user_repo.update_password_hash(&email, &hashed),
        )
        .await?;

        if !updated {
            return Err(OtpError::UserNotFound);
        }

        tracing::info!(challenge_id = %challenge.id, "Password reset committed");
        Ok(())
    }
}
