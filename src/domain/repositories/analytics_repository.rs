//! Repository trait for click recording and aggregation.

use crate::domain::entities::NewLinkEvent;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Click count for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DayClicks {
    /// Midnight UTC of the bucketed day.
    pub day: DateTime<Utc>,
    pub clicks: i64,
}

/// Click count for one source label. A `None` source in the store is
/// reported under the label the aggregator substitutes, not here.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SourceClicks {
    pub source: Option<String>,
    pub clicks: i64,
}

/// Repository interface for click events and their aggregates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnalyticsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Inserts one click event row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. The background
    /// worker absorbs this error; it never reaches a redirect response.
    async fn record_click(&self, event: NewLinkEvent) -> Result<(), AppError>;

    /// Counts all click events for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_clicks(&self, link_id: i64) -> Result<i64, AppError>;

    /// Groups click events by UTC calendar day, ordered chronologically,
    /// one entry per day that has clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clicks_per_day(&self, link_id: i64) -> Result<Vec<DayClicks>, AppError>;

    /// Groups click events by source label, one entry per distinct value
    /// including the null group. Order unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clicks_by_source(&self, link_id: i64) -> Result<Vec<SourceClicks>, AppError>;
}
