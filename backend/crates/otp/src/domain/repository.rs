//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//!
//! Every operation is a single atomic step on the row keyed by email, which
//! is what serialises concurrent requests for the same address.

use kernel::email::Email;
use kernel::id::ChallengeId;
use platform::password::HashedPassword;

use crate::domain::entities::OtpChallenge;
use crate::error::OtpResult;

#[trait_variant::make(OtpChallengeRepository: Send)]
pub trait LocalOtpChallengeRepository {
    /// Store a challenge, superseding any previous one for the same email
    async fn issue(&self, challenge: &OtpChallenge) -> OtpResult<()>;

    /// The challenge for `email` if it exists and has not expired at `now_ms`
    async fn find_live(&self, email: &Email, now_ms: i64) -> OtpResult<Option<OtpChallenge>>;

    /// Count one verification attempt against `challenge_id`
    ///
    /// Succeeds only while the challenge is current, not expired and has
    /// fewer than `max_attempts` recorded; returns whether it was counted.
    async fn record_attempt(
        &self,
        email: &Email,
        challenge_id: ChallengeId,
        max_attempts: u32,
        now_ms: i64,
    ) -> OtpResult<bool>;

    /// Set `verified` only if `challenge_id` is still current and not expired
    ///
    /// Returns whether the flag was set.
    async fn mark_verified(
        &self,
        email: &Email,
        challenge_id: ChallengeId,
        now_ms: i64,
    ) -> OtpResult<bool>;

    /// Remove and return the challenge for `email`, expired or not
    async fn consume(&self, email: &Email) -> OtpResult<Option<OtpChallenge>>;

    /// Remove exactly `challenge_id`; a newer challenge for the email survives
    async fn revoke(&self, email: &Email, challenge_id: ChallengeId) -> OtpResult<bool>;

    /// Purge challenges expired at `now_ms`; returns the number removed
    async fn cleanup_expired(&self, now_ms: i64) -> OtpResult<u64>;
}

/// The slice of the account store the reset protocol is allowed to touch
#[trait_variant::make(UserPasswordRepository: Send)]
pub trait LocalUserPasswordRepository {
    /// Replace the password hash of the account with `email`
    ///
    /// Returns `false` when no account has that email.
    async fn update_password_hash(&self, email: &Email, hash: &HashedPassword)
    -> OtpResult<bool>;
}
