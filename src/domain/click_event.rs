//! Click event message for asynchronous recording.

use chrono::{DateTime, Utc};

use crate::domain::entities::NewLinkEvent;

/// An in-memory click captured by the redirect handler and passed to the
/// background worker over a bounded channel.
///
/// The timestamp is taken when the click happens, not when the worker gets
/// around to persisting it. All visitor context is optional.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub source: Option<String>,
}

impl ClickEvent {
    /// Captures a click for the given link with the current timestamp.
    pub fn new(
        link_id: i64,
        ip_address: Option<String>,
        user_agent: Option<&str>,
        source: Option<&str>,
    ) -> Self {
        Self {
            link_id,
            clicked_at: Utc::now(),
            ip_address,
            user_agent: user_agent.map(|s| s.to_string()),
            source: source.map(|s| s.to_string()),
        }
    }
}

impl From<ClickEvent> for NewLinkEvent {
    fn from(ev: ClickEvent) -> Self {
        Self {
            link_id: ev.link_id,
            clicked_at: ev.clicked_at,
            source: ev.source,
            ip_address: ev.ip_address,
            user_agent: ev.user_agent,
        }
    }
}
