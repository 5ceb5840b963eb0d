//! Verify OTP Use Case (`ISSUED -> VERIFIED`)

use std::sync::Arc;

use kernel::email::Email;

use crate::application::config::OtpConfig;
use crate::application::{now_ms, store_call};
use crate::domain::repository::OtpChallengeRepository;
use crate::domain::value_objects::is_well_formed_code;
use crate::error::OtpResult;

pub struct VerifyOtpUseCase<C>
where
    C: OtpChallengeRepository,
{
    challenge_repo: Arc<C>,
    config: Arc<OtpConfig>,
}

impl<C> VerifyOtpUseCase<C>
where
    C: OtpChallengeRepository,
{
    pub fn new(challenge_repo: Arc<C>, config: Arc<OtpConfig>) -> Self {
        Self {
            challenge_repo,
            config,
        }
    }

    /// Returns `Ok(false)` for every kind of rejection
    ///
    /// Absent, expired, superseded, exhausted, wrong and malformed codes are
    /// not distinguished. Only store failures surface as errors.
    pub async fn execute(&self, email: &str, code: &str) -> OtpResult<bool> {
        let Ok(email) = Email::new(email) else {
            return Ok(false);
        };
        if !is_well_formed_code(code, self.config.code_length) {
            return Ok(false);
        }

        let now = now_ms();
        let Some(challenge) = store_call(
            self.config.store_timeout,
            self.challenge_repo.find_live(&email, now),
        )
        .await?
        else {
            return Ok(false);
        };

        // Reserve the attempt before comparing, so concurrent guesses
        // cannot exceed the budget.
        let counted = store_call(
            self.config.store_timeout,
            self.challenge_repo.record_attempt(
                &email,
                challenge.id,
                self.config.max_attempts,
                now_ms(),
            ),
        )
        .await?;
        if !counted {
            tracing::warn!(challenge_id = %challenge.id, "OTP attempt budget exhausted");
            return Ok(false);
        }

        if !challenge.matches(code) {
            tracing::debug!(challenge_id = %challenge.id, "OTP mismatch");
            return Ok(false);
        }

        // The challenge may have been superseded or expired since the read.
        let verified = store_call(
            self.config.store_timeout,
            self.challenge_repo.mark_verified(&email, challenge.id, now_ms()),
        )
        .await?;

        if verified {
            tracing::info!(challenge_id = %challenge.id, "OTP verified");
        }
        Ok(verified)
    }
}
