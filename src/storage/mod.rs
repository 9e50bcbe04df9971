use async_trait::async_trait;

use crate::domain::{Contact, NewContact, NewUser, NewsletterSubscription, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStorage;
pub use postgres::PostgresStorage;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations shared by every backend.
///
/// All three entity kinds are append-only: records are assigned their
/// identifier and creation timestamp by the store and never mutated
/// afterwards. A missing user is a normal `Ok(None)`, not an error.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError>;

    /// All contact submissions, ordered by creation time ascending.
    async fn contacts(&self) -> Result<Vec<Contact>, StorageError>;

    /// No dedup on email: every call creates a fresh record.
    async fn create_newsletter_subscription(
        &self,
        email: String,
    ) -> Result<NewsletterSubscription, StorageError>;

    /// All newsletter subscriptions, ordered by creation time ascending.
    async fn newsletter_subscriptions(&self) -> Result<Vec<NewsletterSubscription>, StorageError>;

    async fn user(&self, id: i64) -> Result<Option<User>, StorageError>;

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;
}
