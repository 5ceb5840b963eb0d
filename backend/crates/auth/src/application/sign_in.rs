//! Customer Sign In Use Case
//!
//! Unknown email, malformed email and wrong password all end in the same
//! `InvalidCredentials`.

use std::sync::Arc;

use kernel::email::Email;
use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::application::store_call;
use crate::domain::entity::customer::CustomerProfile;
use crate::domain::repository::CustomerRepository;
use crate::error::{AuthError, AuthResult};

pub struct SignInUseCase<U>
where
    U: CustomerRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: CustomerRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, email: &str, password: String) -> AuthResult<CustomerProfile> {
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let credential = store_call(
            self.config.store_timeout,
            self.user_repo.find_credential(&email),
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

        tracing::info!(user_id = %credential.profile.id, "Customer signed in");
        Ok(credential.profile)
    }
}
