//! Contact Message Use Cases

use std::sync::Arc;

use kernel::id::ContactId;

use crate::application::config::ContactConfig;
use crate::application::store_call;
use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};

pub struct SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, message: NewContactMessage) -> ContactResult<ContactMessage> {
        let saved = store_call(self.config.store_timeout, self.repo.create(&message)).await?;
        tracing::info!(contact_id = %saved.id, "Contact message saved");
        Ok(saved)
    }
}

pub struct ListContactsUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> ListContactsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> ContactResult<Vec<ContactMessage>> {
        store_call(self.config.store_timeout, self.repo.list()).await
    }
}

pub struct DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: ContactId) -> ContactResult<()> {
        if !store_call(self.config.store_timeout, self.repo.delete(id)).await? {
            return Err(ContactError::ContactNotFound);
        }
        tracing::info!(contact_id = %id, "Contact message deleted");
        Ok(())
    }
}
