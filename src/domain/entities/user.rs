//! User account entity.

use chrono::{DateTime, Utc};

/// A registered account owning zero or more links.
///
/// The public identifier is derived from `id` on demand via the codec and is
/// never stored; the numeric id stays the single source of truth.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
