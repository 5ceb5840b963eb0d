//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::ChallengeId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::OtpChallenge;
use crate::domain::repository::{OtpChallengeRepository, UserPasswordRepository};
use crate::error::OtpResult;

/// PostgreSQL-backed repository (`otp_challenges` + `users.password_hash`)
#[derive(Clone)]
pub struct PgOtpRepository {
    pool: PgPool,
}

impl PgOtpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OtpChallengeRepository for PgOtpRepository {
    async fn issue(&self, challenge: &OtpChallenge) -> OtpResult<()> {
        sqlx::query(
            r#"
            INSERT INTO otp_challenges (
                email,
                challenge_id,
                code_digest,
                issued_at,
                expires_at_ms,
                verified,
                attempts
            ) VALUES ($1, $2, $3, $4, $5, FALSE, 0)
            ON CONFLICT (email) DO UPDATE SET
                challenge_id = EXCLUDED.challenge_id,
                code_digest = EXCLUDED.code_digest,
                issued_at = EXCLUDED.issued_at,
                expires_at_ms = EXCLUDED.expires_at_ms,
                verified = FALSE,
                attempts = 0
            "#,
        )
        .bind(challenge.email.as_str())
        .bind(challenge.id.into_uuid())
        .bind(&challenge.code_digest)
        .bind(challenge.issued_at)
        .bind(challenge.expires_at_ms)
        .execute(&self.pool)
        .await?;

        tracing::debug!(challenge_id = %challenge.id, "Challenge stored");
        Ok(())
    }

    async fn find_live(&self, email: &Email, now_ms: i64) -> OtpResult<Option<OtpChallenge>> {
        let row = sqlx::query_as::<_, ChallengeRow>(
            r#"
            SELECT email, challenge_id, code_digest, issued_at, expires_at_ms, verified, attempts
            FROM otp_challenges
            WHERE email = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(email.as_str())
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChallengeRow::into_challenge))
    }

    async fn record_attempt(
        &self,
        email: &Email,
        challenge_id: ChallengeId,
        max_attempts: u32,
        now_ms: i64,
    ) -> OtpResult<bool> {
        let max_attempts = i32::try_from(max_attempts).unwrap_or(i32::MAX);
        let updated = sqlx::query(
            r#"
            UPDATE otp_challenges
            SET attempts = attempts + 1
            WHERE email = $1 AND challenge_id = $2 AND expires_at_ms > $3 AND attempts < $4
            "#,
        )
        .bind(email.as_str())
        .bind(challenge_id.into_uuid())
        .bind(now_ms)
        .bind(max_attempts)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }

    async fn mark_verified(
        &self,
        email: &Email,
        challenge_id: ChallengeId,
        now_ms: i64,
    ) -> OtpResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE otp_challenges
            SET verified = TRUE
            WHERE email = $1 AND challenge_id = $2 AND expires_at_ms > $3
            "#,
        )
        .bind(email.as_str())
        .bind(challenge_id.into_uuid())
        .bind(now_ms)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }

    async fn consume(&self, email: &Email) -> OtpResult<Option<OtpChallenge>> {
        let row = sqlx::query_as::<_, ChallengeRow>(
            r#"
            DELETE FROM otp_challenges
            WHERE email = $1
            RETURNING email, challenge_id, code_digest, issued_at, expires_at_ms, verified, attempts
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        if let Some(r) = &row {
            tracing::debug!(challenge_id = %r.challenge_id, "Challenge consumed");
        }
        Ok(row.map(ChallengeRow::into_challenge))
    }

    async fn revoke(&self, email: &Email, challenge_id: ChallengeId) -> OtpResult<bool> {
        let deleted =
            sqlx::query("DELETE FROM otp_challenges WHERE email = $1 AND challenge_id = $2")
                .bind(email.as_str())
                .bind(challenge_id.into_uuid())
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(deleted == 1)
    }

    async fn cleanup_expired(&self, now_ms: i64) -> OtpResult<u64> {
        let deleted = sqlx::query("DELETE FROM otp_challenges WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(challenges = deleted, "Cleaned up expired OTP challenges");
        Ok(deleted)
    }
}

impl UserPasswordRepository for PgOtpRepository {
    async fn update_password_hash(
        &self,
        email: &Email,
        hash: &HashedPassword,
    ) -> OtpResult<bool> {
        let updated = sqlx::query("UPDATE users SET password_hash = $1 WHERE email = $2")
            .bind(hash.as_phc_string())
            .bind(email.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ChallengeRow {
    email: String,
    challenge_id: Uuid,
    code_digest: Vec<u8>,
    issued_at: DateTime<Utc>,
    expires_at_ms: i64,
    verified: bool,
    attempts: i32,
}

impl ChallengeRow {
    fn into_challenge(self) -> OtpChallenge {
        OtpChallenge {
            id: ChallengeId::from_uuid(self.challenge_id),
            email: Email::from_db(self.email),
            code_digest: self.code_digest,
            issued_at: self.issued_at,
            expires_at_ms: self.expires_at_ms,
            verified: self.verified,
            attempts: self.attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Run with `cargo test -p otp -- --ignored` against a database that
    //! `DATABASE_URL` points at; `sqlx::test` applies the migrations.

    use super::*;
    use crate::domain::value_objects::OtpCode;

    fn email() -> Email {
        Email::new("reset@example.com").unwrap()
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_issue_supersedes(pool: PgPool) {
        let repo = PgOtpRepository::new(pool);
        let now = Utc::now();

        let first = OtpChallenge::issue(email(), &OtpCode::generate(6), 300_000, now);
        let second = OtpChallenge::issue(email(), &OtpCode::generate(6), 300_000, now);
        repo.issue(&first).await.unwrap();
        repo.issue(&second).await.unwrap();

        let live = repo
            .find_live(&email(), now.timestamp_millis())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(live.id, second.id);

        assert!(!repo.revoke(&email(), first.id).await.unwrap());
        assert!(
            !repo
                .mark_verified(&email(), first.id, now.timestamp_millis())
                .await
                .unwrap()
        );
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_attempts_are_bounded_and_reset_on_issue(pool: PgPool) {
        let repo = PgOtpRepository::new(pool);
        let now = Utc::now();
        let now_ms = now.timestamp_millis();

        let first = OtpChallenge::issue(email(), &OtpCode::generate(6), 300_000, now);
        repo.issue(&first).await.unwrap();
        assert!(repo.record_attempt(&email(), first.id, 2, now_ms).await.unwrap());
        assert!(repo.record_attempt(&email(), first.id, 2, now_ms).await.unwrap());
        assert!(!repo.record_attempt(&email(), first.id, 2, now_ms).await.unwrap());
        let live = repo.find_live(&email(), now_ms).await.unwrap().unwrap();
        assert_eq!(live.attempts, 2);

        let second = OtpChallenge::issue(email(), &OtpCode::generate(6), 300_000, now);
        repo.issue(&second).await.unwrap();
        assert!(!repo.record_attempt(&email(), first.id, 2, now_ms).await.unwrap());
        assert!(repo.record_attempt(&email(), second.id, 2, now_ms).await.unwrap());
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_expired_is_absent_and_consume_is_once(pool: PgPool) {
        let repo = PgOtpRepository::new(pool);
        let now = Utc::now();
        let challenge = OtpChallenge::issue(email(), &OtpCode::generate(6), 1_000, now);
        repo.issue(&challenge).await.unwrap();

        let later = now.timestamp_millis() + 6 * 60 * 1000;
        assert!(repo.find_live(&email(), later).await.unwrap().is_none());
        assert!(!repo.mark_verified(&email(), challenge.id, later).await.unwrap());

        assert!(repo.consume(&email()).await.unwrap().is_some());
        assert!(repo.consume(&email()).await.unwrap().is_none());
    }
}
