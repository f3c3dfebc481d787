//! AI-generated insights over a user's link analytics.

use std::fmt::Write as _;
use std::sync::Arc;

use serde_json::json;

use crate::application::services::analytics_service::LinkAnalytics;
use crate::domain::repositories::InsightClient;
use crate::error::AppError;

/// Builds a text prompt from analytics data and forwards it to the
/// configured language-model backend.
pub struct InsightService {
    client: Arc<dyn InsightClient>,
}

impl InsightService {
    pub fn new(client: Arc<dyn InsightClient>) -> Self {
        Self { client }
    }

    /// Generates insight text for the given analytics reports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the prompt is empty or
    /// whitespace-only, [`AppError::Upstream`] when generation fails.
    pub async fn generate(
        &self,
        analytics: &[LinkAnalytics],
        user_prompt: &str,
    ) -> Result<String, AppError> {
        if user_prompt.trim().is_empty() {
            return Err(AppError::bad_request(
                "Prompt cannot be empty.",
                json!({ "field": "prompt" }),
            ));
        }

        let summary = summarize(analytics);

        let mut prompt = user_prompt.to_string();
        if !summary.is_empty() {
            prompt.push_str("\n\nHere is your analytics data:\n");
            prompt.push_str(&summary);
        }

        self.client.generate(&prompt).await
    }
}

/// One line per link: totals, per-day breakdown, and source breakdown.
fn summarize(analytics: &[LinkAnalytics]) -> String {
    let mut out = String::new();
    for link in analytics {
        let per_day = if link.clicks_per_day.is_empty() {
            "no daily clicks".to_string()
        } else {
            link.clicks_per_day
                .iter()
                .map(|d| format!("{}: {} clicks", d.day.format("%Y-%m-%d"), d.clicks))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let sources = if link.clicks_by_source.is_empty() {
            "no sources recorded".to_string()
        } else {
            link.clicks_by_source
                .iter()
                .map(|s| format!("{} ({})", s.source, s.clicks))
                .collect::<Vec<_>>()
                .join(", ")
        };

        // String formatting is infallible.
        let _ = writeln!(
            out,
            "Link {} ({}): {} total clicks; daily breakdown: {}; sources: {}.",
            link.shortened_url, link.url, link.total_clicks, per_day, sources
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::analytics_service::SourceBucket;
    use crate::domain::repositories::{DayClicks, MockInsightClient};
    use chrono::{TimeZone, Utc};
    use mockall::predicate;

    fn report(shortened: &str, url: &str) -> LinkAnalytics {
        LinkAnalytics {
            url: url.to_string(),
            shortened_url: shortened.to_string(),
            total_clicks: 3,
            clicks_per_day: vec![
                DayClicks {
                    day: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
                    clicks: 2,
                },
                DayClicks {
                    day: Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, 0).unwrap(),
                    clicks: 1,
                },
            ],
            clicks_by_source: vec![
                SourceBucket {
                    source: "newsletter".to_string(),
                    clicks: 2,
                },
                SourceBucket {
                    source: "unknown".to_string(),
                    clicks: 1,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_prompt() {
        let service = InsightService::new(Arc::new(MockInsightClient::new()));

        for prompt in ["", "   ", "\n\t"] {
            let result = service.generate(&[], prompt).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_generate_forwards_summarized_analytics() {
        let expected = "How are my links doing?\n\nHere is your analytics data:\n\
                        Link http://localhost:3000/a1b2c3d4 (https://example.com): \
                        3 total clicks; daily breakdown: 2026-08-01: 2 clicks, \
                        2026-08-02: 1 clicks; sources: newsletter (2), unknown (1).\n";

        let mut client = MockInsightClient::new();
        client
            .expect_generate()
            .with(predicate::eq(expected))
            .times(1)
            .returning(|_| Ok("Your newsletter drives most traffic.".to_string()));

        let service = InsightService::new(Arc::new(client));
        let text = service
            .generate(
                &[report("http://localhost:3000/a1b2c3d4", "https://example.com")],
                "How are my links doing?",
            )
            .await
            .unwrap();

        assert_eq!(text, "Your newsletter drives most traffic.");
    }

    #[tokio::test]
    async fn test_generate_without_analytics_sends_prompt_verbatim() {
        let mut client = MockInsightClient::new();
        client
            .expect_generate()
            .with(predicate::eq("Any tips?"))
            .times(1)
            .returning(|_| Ok("Create some links first.".to_string()));

        let service = InsightService::new(Arc::new(client));
        let text = service.generate(&[], "Any tips?").await.unwrap();
        assert_eq!(text, "Create some links first.");
    }

    #[tokio::test]
    async fn test_generate_propagates_upstream_failure() {
        let mut client = MockInsightClient::new();
        client.expect_generate().times(1).returning(|_| {
            Err(AppError::upstream(
                "AI generation failed",
                serde_json::Value::Null,
            ))
        });

        let service = InsightService::new(Arc::new(client));
        let result = service.generate(&[], "hello").await;
        assert!(matches!(result.unwrap_err(), AppError::Upstream { .. }));
    }
}
