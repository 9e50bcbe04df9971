/// A stored user account. Only created and read, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
