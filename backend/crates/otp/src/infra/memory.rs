//! In-memory Repository Implementation
//!
//! Same contract as [`super::postgres::PgOtpRepository`], for tests and
//! single-instance development. One `tokio::sync::Mutex` guards each map, so
//! every operation is atomic with respect to the others.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use kernel::email::Email;
use kernel::id::ChallengeId;
use platform::password::HashedPassword;
use tokio::sync::Mutex;

use crate::domain::entities::OtpChallenge;
use crate::domain::repository::{OtpChallengeRepository, UserPasswordRepository};
use crate::error::OtpResult;

#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    challenges: Arc<Mutex<HashMap<Email, OtpChallenge>>>,
    /// email -> PHC password hash
    users: Arc<Mutex<HashMap<Email, String>>>,
}

impl InMemoryOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account so password commits have a row to update
    pub async fn add_user(&self, email: &Email, password_hash: impl Into<String>) {
        self.users
            .lock()
            .await
            .insert(email.clone(), password_hash.into());
    }

    pub async fn password_hash(&self, email: &Email) -> Option<String> {
        self.users.lock().await.get(email).cloned()
    }

    /// Current stored challenge, expired or not
    pub async fn stored(&self, email: &Email) -> Option<OtpChallenge> {
        self.challenges.lock().await.get(email).cloned()
    }

    /// Move a challenge's issue time and deadline into the past
    pub async fn backdate(&self, email: &Email, by: Duration) {
        if let Some(c) = self.challenges.lock().await.get_mut(email) {
            let by_ms = by.as_millis() as i64;
            c.expires_at_ms -= by_ms;
            c.issued_at -= chrono::Duration::milliseconds(by_ms);
        }
    }
}

impl OtpChallengeRepository for InMemoryOtpRepository {
    async fn issue(&self, challenge: &OtpChallenge) -> OtpResult<()> {
        self.challenges
            .lock()
            .await
            .insert(challenge.email.clone(), challenge.clone());
        Ok(())
    }

    async fn find_live(&self, email: &Email, now_ms: i64) -> OtpResult<Option<OtpChallenge>> {
        Ok(self
            .challenges
            .lock()
            .await
            .get(email)
            .filter(|c| !c.is_expired_at(now_ms))
            .cloned())
    }

    async fn record_attempt(
        &self,
        email: &Email,
        challenge_id: ChallengeId,
        max_attempts: u32,
        now_ms: i64,
    ) -> OtpResult<bool> {
        let mut challenges = self.challenges.lock().await;
        match challenges.get_mut(email) {
            Some(c)
                if c.id == challenge_id
                    && !c.is_expired_at(now_ms)
                    && c.has_attempts_left(max_attempts) =>
            {
                c.attempts += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn mark_verified(
        &self,
        email: &Email,
        challenge_id: ChallengeId,
        now_ms: i64,
    ) -> OtpResult<bool> {
        let mut challenges = self.challenges.lock().await;
        match challenges.get_mut(email) {
            Some(c) if c.id == challenge_id && !c.is_expired_at(now_ms) => {
                c.verified = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn consume(&self, email: &Email) -> OtpResult<Option<OtpChallenge>> {
        Ok(self.challenges.lock().await.remove(email))
    }

    async fn revoke(&self, email: &Email, challenge_id: ChallengeId) -> OtpResult<bool> {
        let mut challenges = self.challenges.lock().await;
        if challenges.get(email).is_some_and(|c| c.id == challenge_id) {
            challenges.remove(email);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn cleanup_expired(&self, now_ms: i64) -> OtpResult<u64> {
        let mut challenges = self.challenges.lock().await;
        let before = challenges.len();
        challenges.retain(|_, c| !c.is_expired_at(now_ms));
        Ok((before - challenges.len()) as u64)
    }
}

impl UserPasswordRepository for InMemoryOtpRepository {
    async fn update_password_hash(
        &self,
        email: &Email,
        hash: &HashedPassword,
    ) -> OtpResult<bool> {
        let mut users = self.users.lock().await;
        match users.get_mut(email) {
            Some(stored) => {
                *stored = hash.as_phc_string().to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
