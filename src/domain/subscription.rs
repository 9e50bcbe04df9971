use chrono::{DateTime, Utc};

/// A stored newsletter opt-in. Duplicate emails are allowed, each one is a
/// separate record.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct NewsletterSubscription {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
