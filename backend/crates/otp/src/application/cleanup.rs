//! Expired Challenge Cleanup
//!
//! Expired rows are already ignored by verify and commit; this only
//! reclaims space. Run once at startup and then periodically.

use std::sync::Arc;

use crate::application::config::OtpConfig;
use crate::application::{now_ms, store_call};
use crate::domain::repository::OtpChallengeRepository;
use crate::error::OtpResult;

pub struct CleanupExpiredUseCase<R>
where
    R: OtpChallengeRepository,
{
    repo: Arc<R>,
    config: Arc<OtpConfig>,
}

impl<R> CleanupExpiredUseCase<R>
where
    R: OtpChallengeRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<OtpConfig>) -> Self {
        Self { repo, config }
    }

    /// Number of challenges removed
    pub async fn execute(&self) -> OtpResult<u64> {
        let removed =
            store_call(self.config.store_timeout, self.repo.cleanup_expired(now_ms())).await?;
        if removed > 0 {
            tracing::info!(challenges_deleted = removed, "Expired OTP challenges removed");
        }
        Ok(removed)
    }
}
