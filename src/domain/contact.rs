use chrono::{DateTime, Utc};

/// A stored contact-form submission. Append-only: never updated or deleted.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub interest: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
