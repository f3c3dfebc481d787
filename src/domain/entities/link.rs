//! Link entity representing a shortened URL owned by a user.

use chrono::{DateTime, Utc};

/// A titled destination URL owned by a single user.
///
/// The short public identifier is derived from `id` via the codec whenever an
/// external-facing form is needed; it is never persisted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub user_id: i64,
    pub title: String,
    pub url: String,
}

/// Partial update for an existing link. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl LinkPatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }
}
