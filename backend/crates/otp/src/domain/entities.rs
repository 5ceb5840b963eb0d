//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::ChallengeId;
use platform::crypto::constant_time_eq;

use crate::domain::value_objects::{OtpCode, digest_code};

/// One issued, time-boxed one-time code tied to an email
///
/// The plaintext code is never stored; only its SHA-256 digest.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    /// Changes on every issue, so a superseded challenge can never be
    /// verified or revoked by a stale caller
    pub id: ChallengeId,
    pub email: Email,
    pub code_digest: Vec<u8>,
    pub issued_at: DateTime<Utc>,
    pub expires_at_ms: i64,
    pub verified: bool,
    /// Verification attempts counted against this challenge
    pub attempts: i32,
}

impl OtpChallenge {
    /// Create a new, unverified challenge for `code`
    pub fn issue(email: Email, code: &OtpCode, ttl_ms: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: ChallengeId::new(),
            email,
            code_digest: code.digest(),
            issued_at: now,
            expires_at_ms: now.timestamp_millis().saturating_add(ttl_ms),
            verified: false,
            attempts: 0,
        }
    }

    /// Expired challenges are treated as absent whether or not they were purged
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Whether another verification attempt may be counted
    pub fn has_attempts_left(&self, max_attempts: u32) -> bool {
        u32::try_from(self.attempts).is_ok_and(|used| used < max_attempts)
    }

    /// Constant-time comparison of a submitted code against the digest
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(&digest_code(candidate), &self.code_digest)
    }

    /// Whether a consumed challenge authorises a password change
    pub fn authorises_commit(&self, now_ms: i64) -> bool {
        self.verified && !self.is_expired_at(now_ms)
    }
}
