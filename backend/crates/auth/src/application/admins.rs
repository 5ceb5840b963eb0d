//! Admin Use Cases
//!
//! Admin passwords are only ever compared through their Argon2 hash.

use std::sync::Arc;

use kernel::email::Email;
use kernel::id::AdminId;
use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::application::{parse_email, store_call};
use crate::domain::entity::admin::{Admin, NewAdmin};
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

pub struct AdminSignInUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> AdminSignInUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self, email: &str, password: String) -> AuthResult<Admin> {
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let credential = store_call(
            self.config.store_timeout,
            self.admin_repo.find_credential(&email),
        )
        .await?;

        let password = ClearTextPassword::for_verification(password);
        let Some(credential) = credential else {
            HashedPassword::verify_absent(&password, self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };
        if !credential.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(admin_id = %credential.admin.id, "Admin signed in");
        Ok(credential.admin)
    }
}

pub struct CreateAdminUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> CreateAdminUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self, email: &str, password: String) -> AuthResult<Admin> {
        let email = parse_email(email)?;
        let password_hash = ClearTextPassword::new(password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let admin = store_call(
            self.config.store_timeout,
            self.admin_repo.create(&NewAdmin {
                email,
                password_hash,
            }),
        )
        .await?;

        tracing::info!(admin_id = %admin.id, "Admin created");
        Ok(admin)
    }
}

pub struct ListAdminsUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> ListAdminsUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self) -> AuthResult<Vec<Admin>> {
        store_call(self.config.store_timeout, self.admin_repo.list()).await
    }
}

pub struct DeleteAdminUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> DeleteAdminUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self, id: AdminId) -> AuthResult<()> {
        if !store_call(self.config.store_timeout, self.admin_repo.delete(id)).await? {
            return Err(AuthError::AdminNotFound);
        }
        tracing::info!(admin_id = %id, "Admin deleted");
        Ok(())
    }
}
