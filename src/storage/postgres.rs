use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::configuration::DatabaseSettings;
use crate::domain::{Contact, NewContact, NewUser, NewsletterSubscription, User};
use crate::storage::{Storage, StorageError};

/// Postgres-backed storage. Identifier generation (`BIGSERIAL`) and isolation
/// are delegated to the database; every write is a single-row insert.
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Build a lazy connection pool and bring the schema up to date.
    pub async fn connect(configuration: &DatabaseSettings) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .connect_timeout(std::time::Duration::from_secs(2))
            .connect_lazy_with(configuration.with_db());

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    #[tracing::instrument(name = "Insert contact submission", skip(self, contact))]
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError> {
        let record = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, company, interest, message, created_at)
            VALUES ($1, $2, $3, $4, $5, now())
            RETURNING id, name, email, company, interest, message, created_at
            "#,
        )
        .bind(contact.name.as_ref())
        .bind(contact.email.as_ref())
        .bind(contact.company.as_deref())
        .bind(contact.interest.as_ref())
        .bind(contact.message.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(record)
    }

    #[tracing::instrument(name = "Fetch all contact submissions", skip(self))]
    async fn contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let records = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, email, company, interest, message, created_at
            FROM contacts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(records)
    }

    #[tracing::instrument(name = "Insert newsletter subscription", skip(self))]
    async fn create_newsletter_subscription(
        &self,
        email: String,
    ) -> Result<NewsletterSubscription, StorageError> {
        let record = sqlx::query_as::<_, NewsletterSubscription>(
            r#"
            INSERT INTO newsletter_subscriptions (email, created_at)
            VALUES ($1, now())
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(record)
    }

    #[tracing::instrument(name = "Fetch all newsletter subscriptions", skip(self))]
    async fn newsletter_subscriptions(&self) -> Result<Vec<NewsletterSubscription>, StorageError> {
        let records = sqlx::query_as::<_, NewsletterSubscription>(
            r#"
            SELECT id, email, created_at
            FROM newsletter_subscriptions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(records)
    }

    #[tracing::instrument(name = "Fetch user by id", skip(self))]
    async fn user(&self, id: i64) -> Result<Option<User>, StorageError> {
        let record = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(record)
    }

    #[tracing::instrument(name = "Fetch user by username", skip(self))]
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let record = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(record)
    }

    #[tracing::instrument(name = "Insert user", skip(self, user))]
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let record = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(user.username)
        .bind(user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(record)
    }
}
