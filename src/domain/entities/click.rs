//! Click event entity for recorded link visits.

use chrono::{DateTime, Utc};

/// One recorded visit to a shortened link.
///
/// Immutable once created; rows are only ever removed by cascade when the
/// owning link is deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LinkEvent {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub source: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for recording a click.
#[derive(Debug, Clone)]
pub struct NewLinkEvent {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub source: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
