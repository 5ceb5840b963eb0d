//! In-memory Repository Implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::email::Email;
use kernel::id::{ContactId, SubscriberId};
use tokio::sync::Mutex;

use crate::domain::entities::{ContactMessage, NewContactMessage, Subscriber};
use crate::domain::repository::{ContactRepository, SubscriberRepository};
use crate::error::{ContactError, ContactResult};

#[derive(Default)]
struct State {
    next_contact_id: i64,
    contacts: BTreeMap<i64, ContactMessage>,
    next_subscriber_id: i64,
    subscribers: BTreeMap<i64, Subscriber>,
}

#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, message: &NewContactMessage) -> ContactResult<ContactMessage> {
        let mut state = self.state.lock().await;
        state.next_contact_id += 1;
        let saved = ContactMessage {
            id: ContactId::from_i64(state.next_contact_id),
            first_name: message.first_name.clone(),
            last_name: message.last_name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
            created_at: Utc::now(),
        };
        state.contacts.insert(saved.id.as_i64(), saved.clone());
        Ok(saved)
    }

    async fn list(&self) -> ContactResult<Vec<ContactMessage>> {
        Ok(self.state.lock().await.contacts.values().rev().cloned().collect())
    }

    async fn delete(&self, id: ContactId) -> ContactResult<bool> {
        Ok(self.state.lock().await.contacts.remove(&id.as_i64()).is_some())
    }
}

impl SubscriberRepository for InMemoryContactRepository {
    async fn subscribe(&self, email: &Email) -> ContactResult<Subscriber> {
        let mut state = self.state.lock().await;
        if state.subscribers.values().any(|s| &s.email == email) {
            return Err(ContactError::AlreadySubscribed);
        }
        state.next_subscriber_id += 1;
        let subscriber = Subscriber {
            id: SubscriberId::from_i64(state.next_subscriber_id),
            email: email.clone(),
            created_at: Utc::now(),
        };
        state
            .subscribers
            .insert(subscriber.id.as_i64(), subscriber.clone());
        Ok(subscriber)
    }

    async fn list_subscribers(&self) -> ContactResult<Vec<Subscriber>> {
        Ok(self
            .state
            .lock()
            .await
            .subscribers
            .values()
            .rev()
            .cloned()
            .collect())
    }

    async fn unsubscribe(&self, id: SubscriberId) -> ContactResult<bool> {
        Ok(self
            .state
            .lock()
            .await
            .subscribers
            .remove(&id.as_i64())
            .is_some())
    }
}
