//! Repository Traits

use kernel::email::Email;
use kernel::id::{ContactId, SubscriberId};

use crate::domain::entities::{ContactMessage, NewContactMessage, Subscriber};
use crate::error::ContactResult;

#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    async fn create(&self, message: &NewContactMessage) -> ContactResult<ContactMessage>;

    /// Newest first
    async fn list(&self) -> ContactResult<Vec<ContactMessage>>;

    async fn delete(&self, id: ContactId) -> ContactResult<bool>;
}

#[trait_variant::make(SubscriberRepository: Send)]
pub trait LocalSubscriberRepository {
    /// `ContactError::AlreadySubscribed` when the email is already on the list
    async fn subscribe(&self, email: &Email) -> ContactResult<Subscriber>;

    /// Newest first
    async fn list_subscribers(&self) -> ContactResult<Vec<Subscriber>>;

    async fn unsubscribe(&self, id: SubscriberId) -> ContactResult<bool>;
}
