//! Repository Traits
//!
//! Uniqueness of emails is enforced by the store; `create` reports a
//! duplicate as `AuthError::EmailTaken`, including when two sign-ups race.

use kernel::email::Email;
use kernel::id::{AdminId, UserId};
use platform::password::HashedPassword;

use crate::domain::entity::admin::{Admin, AdminCredential, NewAdmin};
use crate::domain::entity::customer::{CustomerCredential, CustomerProfile, NewCustomer};
use crate::error::AuthResult;

#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> AuthResult<UserId>;

    async fn find_credential(&self, email: &Email) -> AuthResult<Option<CustomerCredential>>;

    /// Ascending by id
    async fn list(&self) -> AuthResult<Vec<CustomerProfile>>;

    /// `false` when no customer has `id`
    async fn delete(&self, id: UserId) -> AuthResult<bool>;

    /// `false` when no customer has `email`
    async fn update_password_hash(
        &self,
        email: &Email,
        hash: &HashedPassword,
    ) -> AuthResult<bool>;
}

#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    async fn create(&self, admin: &NewAdmin) -> AuthResult<Admin>;

    async fn find_credential(&self, email: &Email) -> AuthResult<Option<AdminCredential>>;

    /// Ascending by id
    async fn list(&self) -> AuthResult<Vec<Admin>>;

    async fn delete(&self, id: AdminId) -> AuthResult<bool>;
}
