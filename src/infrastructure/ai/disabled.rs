//! Fallback insight client used when no API key is configured.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::repositories::InsightClient;
use crate::error::AppError;

/// Insight client that rejects every request.
///
/// Installed when `GEMINI_API_KEY` is not set, so the rest of the service
/// works and only the insights endpoint fails.
#[derive(Debug, Default, Clone)]
pub struct DisabledInsightClient;

impl DisabledInsightClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InsightClient for DisabledInsightClient {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::upstream(
            "AI insights are not configured",
            json!({ "reason": "missing api key" }),
        ))
    }
}
