//! Sign Up Use Case
//!
//! Creates a new customer account.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::{parse_email, store_call};
use crate::domain::entity::customer::NewCustomer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::person_name::PersonName;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: CustomerRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: CustomerRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<UserId> {
        let first_name =
            PersonName::new(&input.first_name, "firstName").map_err(AuthError::Validation)?;
        let last_name =
            PersonName::new(&input.last_name, "lastName").map_err(AuthError::Validation)?;
        let email = parse_email(&input.email)?;

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let customer = NewCustomer {
            first_name,
            last_name,
            email,
            phone: input.phone.trim().to_string(),
            address: input.address.trim().to_string(),
            password_hash,
        };

        let user_id =
            store_call(self.config.store_timeout, self.user_repo.create(&customer)).await?;

        tracing::info!(user_id = %user_id, "Customer signed up");
        Ok(user_id)
    }
}
