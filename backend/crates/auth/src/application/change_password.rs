//! Change Password Use Case
//!
//! Signed-in password change: the current password must be supplied.
//! Forgotten passwords go through the OTP reset flow instead.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::{parse_email, store_call};
use crate::domain::repository::CustomerRepository;
use crate::error::{AuthError, AuthResult};

pub struct ChangePasswordInput {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

pub struct ChangePasswordUseCase<U>
where
    U: CustomerRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ChangePasswordUseCase<U>
where
    U: CustomerRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: ChangePasswordInput) -> AuthResult<()> {
        let email = parse_email(&input.email)?;
        let new_password = ClearTextPassword::new(input.new_password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;

        let credential = store_call(
            self.config.store_timeout,
            self.user_repo.find_credential(&email),
        )
        .await?
        .ok_or(AuthError::UserNotFound)?;

        let old_password = ClearTextPassword::for_verification(input.old_password);
        if !credential
            .password_hash
            .verify(&old_password, self.config.pepper())
        {
            return Err(AuthError::OldPasswordMismatch);
        }

        let hashed = new_password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let updated = store_call(
            self.config.store_timeout,
            self.user_repo.update_password_hash(&email, &hashed),
        )
        .await?;
        if !updated {
            // Deleted between the lookup and the update
            return Err(AuthError::UserNotFound);
        }

        tracing::info!(user_id = %credential.profile.id, "Password changed");
        Ok(())
    }
}
