//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::error::conversions::is_unique_violation;
use kernel::id::{AdminId, UserId};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::admin::{Admin, AdminCredential, NewAdmin};
use crate::domain::entity::customer::{CustomerCredential, CustomerProfile, NewCustomer};
use crate::domain::repository::{AdminRepository, CustomerRepository};
use crate::domain::value_object::person_name::PersonName;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed repository (`users` + `admins`)
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Duplicate emails surface as `EmailTaken`, everything else as a store error
fn insert_error(err: sqlx::Error) -> AuthError {
    if is_unique_violation(&err) {
        AuthError::EmailTaken
    } else {
        AuthError::Database(err)
    }
}

fn parse_hash(phc: String) -> AuthResult<HashedPassword> {
    HashedPassword::from_phc_string(phc)
        .map_err(|e| AuthError::Internal(format!("stored password hash: {e}")))
}

impl CustomerRepository for PgAuthRepository {
    async fn create(&self, customer: &NewCustomer) -> AuthResult<UserId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (first_name, last_name, email, phone, address, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(customer.first_name.as_str())
        .bind(customer.last_name.as_str())
        .bind(customer.email.as_str())
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(customer.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(UserId::from_i64(id))
    }

    async fn find_credential(&self, email: &Email) -> AuthResult<Option<CustomerCredential>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, address, created_at, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CustomerRow::into_credential).transpose()
    }

    async fn list(&self) -> AuthResult<Vec<CustomerProfile>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, address, created_at, password_hash
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CustomerRow::into_profile).collect())
    }

    async fn delete(&self, id: UserId) -> AuthResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_password_hash(
        &self,
        email: &Email,
        hash: &HashedPassword,
    ) -> AuthResult<bool> {
        let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE email = $2")
            .bind(hash.as_phc_string())
            .bind(email.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl AdminRepository for PgAuthRepository {
    async fn create(&self, admin: &NewAdmin) -> AuthResult<Admin> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, created_at, password_hash
            "#,
        )
        .bind(admin.email.as_str())
        .bind(admin.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(row.into_admin())
    }

    async fn find_credential(&self, email: &Email) -> AuthResult<Option<AdminCredential>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, email, created_at, password_hash
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_credential).transpose()
    }

    async fn list(&self) -> AuthResult<Vec<Admin>> {
        let rows = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, email, created_at, password_hash
            FROM admins
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminRow::into_admin).collect())
    }

    async fn delete(&self, id: AdminId) -> AuthResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
    created_at: DateTime<Utc>,
    password_hash: String,
}

impl CustomerRow {
    fn into_profile(self) -> CustomerProfile {
        CustomerProfile {
            id: UserId::from_i64(self.id),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            email: Email::from_db(self.email),
            phone: self.phone,
            address: self.address,
            created_at: self.created_at,
        }
    }

    fn into_credential(mut self) -> AuthResult<CustomerCredential> {
        let password_hash = parse_hash(std::mem::take(&mut self.password_hash))?;
        Ok(CustomerCredential {
            profile: self.into_profile(),
            password_hash,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i64,
    email: String,
    created_at: DateTime<Utc>,
    password_hash: String,
}

impl AdminRow {
    fn into_admin(self) -> Admin {
        Admin {
            id: AdminId::from_i64(self.id),
            email: Email::from_db(self.email),
            created_at: self.created_at,
        }
    }

    fn into_credential(mut self) -> AuthResult<AdminCredential> {
        let password_hash = parse_hash(std::mem::take(&mut self.password_hash))?;
        Ok(AdminCredential {
            admin: self.into_admin(),
            password_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn hash(raw: &str) -> HashedPassword {
        ClearTextPassword::new(raw.to_string())
            .unwrap()
            .hash(None)
            .unwrap()
    }

    fn customer(email: &str) -> NewCustomer {
        NewCustomer {
            first_name: PersonName::from_db("Asha".into()),
            last_name: PersonName::from_db("Rao".into()),
            email: Email::new(email).unwrap(),
            phone: "9876543210".into(),
            address: "12 MG Road".into(),
            password_hash: hash("correct horse battery"),
        }
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_duplicate_signup_is_email_taken(pool: PgPool) {
        let repo = PgAuthRepository::new(pool);
        CustomerRepository::create(&repo, &customer("a@example.com"))
            .await
            .unwrap();

        let err = CustomerRepository::create(&repo, &customer("a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_admin_round_trip(pool: PgPool) {
        let repo = PgAuthRepository::new(pool);
        let admin = AdminRepository::create(
            &repo,
            &NewAdmin {
                email: Email::new("root@example.com").unwrap(),
                password_hash: hash("correct horse battery"),
            },
        )
        .await
        .unwrap();

        let found = AdminRepository::find_credential(&repo, &admin.email)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.admin, admin);
        assert!(AdminRepository::delete(&repo, admin.id).await.unwrap());
        assert!(AdminRepository::list(&repo).await.unwrap().is_empty());
    }
}
