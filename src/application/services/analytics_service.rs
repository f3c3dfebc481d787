//! Per-link click analytics aggregation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::{AnalyticsRepository, DayClicks, LinkRepository};
use crate::error::AppError;
use crate::utils::idcodec::IdCodec;

/// Label substituted for click events recorded without a source tag.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Click count for one source label, null sources folded into
/// [`UNKNOWN_SOURCE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBucket {
    pub source: String,
    pub clicks: i64,
}

/// Aggregated analytics for one link.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub url: String,
    pub shortened_url: String,
    pub total_clicks: i64,
    /// One entry per distinct UTC calendar day with clicks, chronological.
    pub clicks_per_day: Vec<DayClicks>,
    /// One entry per distinct source label, order unspecified.
    pub clicks_by_source: Vec<SourceBucket>,
}

/// Service computing analytics over a user's recorded click events.
///
/// Constructed per request with the authenticated owner's id; the same
/// ownership rule as link management applies, so another user's link is
/// `NotFound` here too.
pub struct AnalyticsService {
    links: Arc<dyn LinkRepository>,
    analytics: Arc<dyn AnalyticsRepository>,
    codec: IdCodec,
    base_url: String,
    owner_id: i64,
}

impl AnalyticsService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        analytics: Arc<dyn AnalyticsRepository>,
        codec: IdCodec,
        base_url: String,
        owner_id: i64,
    ) -> Self {
        Self {
            links,
            analytics,
            codec,
            base_url,
            owner_id,
        }
    }

    /// Computes analytics for one owned link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] when the identifier does not
    /// decode, [`AppError::NotFound`] when no owned link matches.
    pub async fn link_analytics(&self, public_id: &str) -> Result<LinkAnalytics, AppError> {
        let id = self.codec.decode(public_id).map_err(|_| {
            AppError::invalid_identifier("Invalid public ID", json!({ "id": public_id }))
        })?;

        let link = self
            .links
            .find_by_id_and_user(id, self.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": public_id })))?;

        self.aggregate(&link).await
    }

    /// Computes analytics independently for every link the user owns.
    ///
    /// A user with no links gets an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn all_links_analytics(&self) -> Result<Vec<LinkAnalytics>, AppError> {
        let links = self.links.list_by_user(self.owner_id).await?;

        let mut out = Vec::with_capacity(links.len());
        for link in &links {
            out.push(self.aggregate(link).await?);
        }

        Ok(out)
    }

    async fn aggregate(&self, link: &Link) -> Result<LinkAnalytics, AppError> {
        let total_clicks = self.analytics.count_clicks(link.id).await?;
        let clicks_per_day = self.analytics.clicks_per_day(link.id).await?;

        let clicks_by_source = self
            .analytics
            .clicks_by_source(link.id)
            .await?
            .into_iter()
            .map(|bucket| SourceBucket {
                source: bucket.source.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
                clicks: bucket.clicks,
            })
            .collect();

        Ok(LinkAnalytics {
            url: link.url.clone(),
            shortened_url: self.shortened_url(link.id),
            total_clicks,
            clicks_per_day,
            clicks_by_source,
        })
    }

    fn shortened_url(&self, link_id: i64) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.codec.encode(link_id)
        )
    }
}
