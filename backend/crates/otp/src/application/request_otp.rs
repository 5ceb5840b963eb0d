//! Request OTP Use Case (`any -> ISSUED`)

use std::sync::Arc;

use kernel::email::Email;
use platform::deadline::bounded;
use platform::mail::{MailSender, OutboundMail};

use crate::application::config::OtpConfig;
use crate::application::store_call;
use crate::domain::entities::OtpChallenge;
use crate::domain::repository::OtpChallengeRepository;
use crate::domain::value_objects::OtpCode;
use crate::error::{OtpError, OtpResult};

#[derive(Debug, Clone)]
pub struct RequestOtpOutput {
    pub expires_at_ms: i64,
}

pub struct RequestOtpUseCase<C, M>
where
    C: OtpChallengeRepository,
    M: MailSender,
{
    challenge_repo: Arc<C>,
    mailer: Arc<M>,
    config: Arc<OtpConfig>,
}

impl<C, M> RequestOtpUseCase<C, M>
where
    C: OtpChallengeRepository,
    M: MailSender,
{
    pub fn new(challenge_repo: Arc<C>, mailer: Arc<M>, config: Arc<OtpConfig>) -> Self {
        Self {
            challenge_repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, email: &str) -> OtpResult<RequestOtpOutput> {
        let email = Email::new(email).map_err(|e| OtpError::InvalidEmail(e.message().to_string()))?;

        let code = OtpCode::generate(self.config.code_length);
        let challenge = OtpChallenge::issue(
            email.clone(),
            &code,
            self.config.code_ttl_ms(),
            chrono::Utc::now(),
        );

        store_call(self.config.store_timeout, self.challenge_repo.issue(&challenge)).await?;

        let mail = OutboundMail {
            to: email.as_str().to_string(),
            subject: self.config.mail_subject.clone(),
            body: self.config.mail_body(code.as_str()),
        };

        let delivered = match bounded(self.config.mail_timeout, self.mailer.send(mail)).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::warn!(challenge_id = %challenge.id, error = %e, "OTP mail rejected");
                false
            }
            Err(_) => {
                tracing::warn!(challenge_id = %challenge.id, "OTP mail timed out");
                false
            }
        };

        if !delivered {
            // Only this challenge; a concurrent newer request keeps its code.
            if let Err(e) = store_call(
                self.config.store_timeout,
                self.challenge_repo.revoke(&email, challenge.id),
            )
            .await
            {
                tracing::error!(
                    challenge_id = %challenge.id,
                    error = %e,
                    "Failed to revoke undelivered challenge"
                );
            }
            return Err(OtpError::DeliveryFailed);
        }

        tracing::info!(
            challenge_id = %challenge.id,
            expires_at_ms = challenge.expires_at_ms,
            "Issued OTP challenge"
        );

        Ok(RequestOtpOutput {
            expires_at_ms: challenge.expires_at_ms,
        })
    }
}
