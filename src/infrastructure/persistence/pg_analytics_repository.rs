//! PostgreSQL implementation of the analytics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewLinkEvent;
use crate::domain::repositories::{AnalyticsRepository, DayClicks, SourceClicks};
use crate::error::AppError;

/// PostgreSQL repository for click events and their aggregates.
pub struct PgAnalyticsRepository {
    pool: Arc<PgPool>,
}

impl PgAnalyticsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    async fn record_click(&self, event: NewLinkEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO link_events (link_id, clicked_at, source, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event.link_id)
        .bind(event.clicked_at)
        .bind(&event.source)
        .bind(&event.ip_address)
        .bind(&event.user_agent)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn count_clicks(&self, link_id: i64) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM link_events
            WHERE link_id = $1
            "#,
        )
        .bind(link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(total)
    }

    async fn clicks_per_day(&self, link_id: i64) -> Result<Vec<DayClicks>, AppError> {
        // Buckets are UTC calendar days regardless of the session time zone.
        let rows = sqlx::query_as::<_, DayClicks>(
            r#"
            SELECT date_trunc('day', clicked_at AT TIME ZONE 'UTC') AT TIME ZONE 'UTC' AS day,
                   COUNT(*) AS clicks
            FROM link_events
            WHERE link_id = $1
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn clicks_by_source(&self, link_id: i64) -> Result<Vec<SourceClicks>, AppError> {
        let rows = sqlx::query_as::<_, SourceClicks>(
            r#"
            SELECT source, COUNT(*) AS clicks
            FROM link_events
            WHERE link_id = $1
            GROUP BY source
            ORDER BY clicks DESC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
