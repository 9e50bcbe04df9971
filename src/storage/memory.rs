use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Contact, NewContact, NewUser, NewsletterSubscription, User};
use crate::storage::{Storage, StorageError};

/// Map-backed storage. Records live for the process lifetime only.
///
/// Identifier assignment and insertion happen under a single lock
/// acquisition, so concurrent requests cannot observe a gap or a duplicate.
/// The lock is never held across an await point.
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

struct Inner {
    contacts: BTreeMap<i64, Contact>,
    subscriptions: BTreeMap<i64, NewsletterSubscription>,
    users: BTreeMap<i64, User>,
    next_contact_id: i64,
    next_subscription_id: i64,
    next_user_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                contacts: BTreeMap::new(),
                subscriptions: BTreeMap::new(),
                users: BTreeMap::new(),
                next_contact_id: 1,
                next_subscription_id: 1,
                next_user_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("in-memory storage lock was poisoned")
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError> {
        let mut inner = self.lock();
        let id = inner.next_contact_id;
        inner.next_contact_id += 1;

        let record = Contact {
            id,
            name: contact.name.as_ref().to_string(),
            email: contact.email.as_ref().to_string(),
            company: contact.company,
            interest: contact.interest.as_ref().to_string(),
            message: contact.message.as_ref().to_string(),
            created_at: Utc::now(),
        };
        inner.contacts.insert(id, record.clone());
        Ok(record)
    }

    async fn contacts(&self) -> Result<Vec<Contact>, StorageError> {
        // BTreeMap iteration is ascending by id, which is creation order.
        Ok(self.lock().contacts.values().cloned().collect())
    }

    async fn create_newsletter_subscription(
        &self,
        email: String,
    ) -> Result<NewsletterSubscription, StorageError> {
        let mut inner = self.lock();
        let id = inner.next_subscription_id;
        inner.next_subscription_id += 1;

        let record = NewsletterSubscription {
            id,
            email,
            created_at: Utc::now(),
        };
        inner.subscriptions.insert(id, record.clone());
        Ok(record)
    }

    async fn newsletter_subscriptions(&self) -> Result<Vec<NewsletterSubscription>, StorageError> {
        Ok(self.lock().subscriptions.values().cloned().collect())
    }

    async fn user(&self, id: i64) -> Result<Option<User>, StorageError> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let inner = self.lock();
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut inner = self.lock();
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let record = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
        };
        inner.users.insert(id, record.clone());
        Ok(record)
    }
}
