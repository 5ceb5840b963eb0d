//! Newsletter Subscriber Use Cases
//!
//! Duplicate detection relies on the store's uniqueness guarantee rather
//! than a read-then-insert, so concurrent duplicates also conflict.

use std::sync::Arc;

use kernel::email::Email;
use kernel::id::SubscriberId;

use crate::application::config::ContactConfig;
use crate::application::store_call;
use crate::domain::entities::Subscriber;
use crate::domain::repository::SubscriberRepository;
use crate::error::{ContactError, ContactResult};

pub struct SubscribeUseCase<R>
where
    R: SubscriberRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> SubscribeUseCase<R>
where
    R: SubscriberRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, email: &str) -> ContactResult<Subscriber> {
        let email = Email::new(email)
            .map_err(|_| ContactError::Validation("Valid email is required".to_string()))?;
        let subscriber = store_call(self.config.store_timeout, self.repo.subscribe(&email)).await?;
        tracing::info!(subscriber_id = %subscriber.id, "Subscribed");
        Ok(subscriber)
    }
}

pub struct ListSubscribersUseCase<R>
where
    R: SubscriberRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> ListSubscribersUseCase<R>
where
    R: SubscriberRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> ContactResult<Vec<Subscriber>> {
        store_call(self.config.store_timeout, self.repo.list_subscribers()).await
    }
}

pub struct UnsubscribeUseCase<R>
where
    R: SubscriberRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> UnsubscribeUseCase<R>
where
    R: SubscriberRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: SubscriberId) -> ContactResult<()> {
        if !store_call(self.config.store_timeout, self.repo.unsubscribe(id)).await? {
            return Err(ContactError::SubscriberNotFound);
        }
        tracing::info!(subscriber_id = %id, "Unsubscribed");
        Ok(())
    }
}
