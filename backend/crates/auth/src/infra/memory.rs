//! In-memory Repository Implementation
//!
//! Used by tests and local development without a database.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::email::Email;
use kernel::id::{AdminId, UserId};
use platform::password::HashedPassword;
use tokio::sync::Mutex;

use crate::domain::entity::admin::{Admin, AdminCredential, NewAdmin};
use crate::domain::entity::customer::{CustomerCredential, CustomerProfile, NewCustomer};
use crate::domain::repository::{AdminRepository, CustomerRepository};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    next_user_id: i64,
    users: BTreeMap<i64, CustomerCredential>,
    next_admin_id: i64,
    admins: BTreeMap<i64, AdminCredential>,
}

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored hash for `email`, if that customer exists
    pub async fn password_hash(&self, email: &Email) -> Option<HashedPassword> {
        self.state
            .lock()
            .await
            .users
            .values()
            .find(|c| &c.profile.email == email)
            .map(|c| c.password_hash.clone())
    }
}

impl CustomerRepository for InMemoryAuthRepository {
    async fn create(&self, customer: &NewCustomer) -> AuthResult<UserId> {
        let mut state = self.state.lock().await;
        if state
            .users
            .values()
            .any(|c| c.profile.email == customer.email)
        {
            return Err(AuthError::EmailTaken);
        }

        state.next_user_id += 1;
        let id = UserId::from_i64(state.next_user_id);
        state.users.insert(
            id.as_i64(),
            CustomerCredential {
                profile: CustomerProfile {
                    id,
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    email: customer.email.clone(),
                    phone: customer.phone.clone(),
                    address: customer.address.clone(),
                    created_at: Utc::now(),
                },
                password_hash: customer.password_hash.clone(),
            },
        );
        Ok(id)
    }

    async fn find_credential(&self, email: &Email) -> AuthResult<Option<CustomerCredential>> {
        Ok(self
            .state
            .lock()
            .await
            .users
            .values()
            .find(|c| &c.profile.email == email)
            .cloned())
    }

    async fn list(&self) -> AuthResult<Vec<CustomerProfile>> {
        Ok(self
            .state
            .lock()
            .await
            .users
            .values()
            .map(|c| c.profile.clone())
            .collect())
    }

    async fn delete(&self, id: UserId) -> AuthResult<bool> {
        Ok(self.state.lock().await.users.remove(&id.as_i64()).is_some())
    }

    async fn update_password_hash(
        &self,
        email: &Email,
        hash: &HashedPassword,
    ) -> AuthResult<bool> {
        let mut state = self.state.lock().await;
        match state.users.values_mut().find(|c| &c.profile.email == email) {
            Some(customer) => {
                customer.password_hash = hash.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl AdminRepository for InMemoryAuthRepository {
    async fn create(&self, admin: &NewAdmin) -> AuthResult<Admin> {
        let mut state = self.state.lock().await;
        if state.admins.values().any(|a| a.admin.email == admin.email) {
            return Err(AuthError::EmailTaken);
        }

        state.next_admin_id += 1;
        let created = Admin {
            id: AdminId::from_i64(state.next_admin_id),
            email: admin.email.clone(),
            created_at: Utc::now(),
        };
        state.admins.insert(
            created.id.as_i64(),
            AdminCredential {
                admin: created.clone(),
                password_hash: admin.password_hash.clone(),
            },
        );
        Ok(created)
    }

    async fn find_credential(&self, email: &Email) -> AuthResult<Option<AdminCredential>> {
        Ok(self
            .state
            .lock()
            .await
            .admins
            .values()
            .find(|a| &a.admin.email == email)
            .cloned())
    }

    async fn list(&self) -> AuthResult<Vec<Admin>> {
        Ok(self
            .state
            .lock()
            .await
            .admins
            .values()
            .map(|a| a.admin.clone())
            .collect())
    }

    async fn delete(&self, id: AdminId) -> AuthResult<bool> {
        Ok(self.state.lock().await.admins.remove(&id.as_i64()).is_some())
    }
}
