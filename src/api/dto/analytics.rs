//! DTOs for analytics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::analytics_service::LinkAnalytics;

/// Click count for one UTC calendar day.
#[derive(Debug, Serialize)]
pub struct ClicksPerDay {
    pub day: DateTime<Utc>,
    pub clicks: i64,
}

/// Click count for one source label.
#[derive(Debug, Serialize)]
pub struct ClicksBySource {
    pub source: String,
    pub clicks: i64,
}

/// Analytics report for one link.
#[derive(Debug, Serialize)]
pub struct LinkAnalyticsResponse {
    pub url: String,
    pub shortened_url: String,
    pub total_clicks: i64,
    pub clicks_per_day: Vec<ClicksPerDay>,
    pub clicks_by_source: Vec<ClicksBySource>,
}

impl From<LinkAnalytics> for LinkAnalyticsResponse {
    fn from(report: LinkAnalytics) -> Self {
        Self {
            url: report.url,
            shortened_url: report.shortened_url,
            total_clicks: report.total_clicks,
            clicks_per_day: report
                .clicks_per_day
                .into_iter()
                .map(|d| ClicksPerDay {
                    day: d.day,
                    clicks: d.clicks,
                })
                .collect(),
            clicks_by_source: report
                .clicks_by_source
                .into_iter()
                .map(|s| ClicksBySource {
                    source: s.source,
                    clicks: s.clicks,
                })
                .collect(),
        }
    }
}

/// Analytics reports for every link the user owns.
#[derive(Debug, Serialize)]
pub struct AllLinksAnalyticsResponse {
    pub links: Vec<LinkAnalyticsResponse>,
}
