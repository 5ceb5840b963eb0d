//! Customer administration (list / delete)

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::store_call;
use crate::domain::entity::customer::CustomerProfile;
use crate::domain::repository::CustomerRepository;
use crate::error::{AuthError, AuthResult};

pub struct ListUsersUseCase<U>
where
    U: CustomerRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ListUsersUseCase<U>
where
    U: CustomerRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self) -> AuthResult<Vec<CustomerProfile>> {
        store_call(self.config.store_timeout, self.user_repo.list()).await
    }
}

pub struct DeleteUserUseCase<U>
where
    U: CustomerRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> DeleteUserUseCase<U>
where
    U: CustomerRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, id: UserId) -> AuthResult<()> {
        if !store_call(self.config.store_timeout, self.user_repo.delete(id)).await? {
            return Err(AuthError::UserNotFound);
        }
        tracing::info!(user_id = %id, "Customer deleted");
        Ok(())
    }
}
