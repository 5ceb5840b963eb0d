//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::error::conversions::is_unique_violation;
use kernel::id::{ContactId, SubscriberId};
use sqlx::PgPool;

use crate::domain::entities::{ContactMessage, NewContactMessage, Subscriber};
use crate::domain::repository::{ContactRepository, SubscriberRepository};
use crate::error::{ContactError, ContactResult};

/// PostgreSQL-backed repository (`contacts` + `subscribers`)
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContactRepository for PgContactRepository {
    async fn create(&self, message: &NewContactMessage) -> ContactResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, message, created_at
            "#,
        )
        .bind(&message.first_name)
        .bind(&message.last_name)
        .bind(message.email.as_str())
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_message())
    }

    async fn list(&self) -> ContactResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactRow::into_message).collect())
    }

    async fn delete(&self, id: ContactId) -> ContactResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl SubscriberRepository for PgContactRepository {
    async fn subscribe(&self, email: &Email) -> ContactResult<Subscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            r#"
            INSERT INTO subscribers (email)
            VALUES ($1)
            RETURNING id, email, created_at
            "#,
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ContactError::AlreadySubscribed
            } else {
                ContactError::Database(e)
            }
        })?;

        Ok(row.into_subscriber())
    }

    async fn list_subscribers(&self) -> ContactResult<Vec<Subscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(
            r#"
            SELECT id, email, created_at
            FROM subscribers
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SubscriberRow::into_subscriber).collect())
    }

    async fn unsubscribe(&self, id: SubscriberId) -> ContactResult<bool> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl ContactRow {
    fn into_message(self) -> ContactMessage {
        ContactMessage {
            id: ContactId::from_i64(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::from_db(self.email),
            message: self.message,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    created_at: DateTime<Utc>,
}

impl SubscriberRow {
    fn into_subscriber(self) -> Subscriber {
        Subscriber {
            id: SubscriberId::from_i64(self.id),
            email: Email::from_db(self.email),
            created_at: self.created_at,
        }
    }
}
