//! DTOs for the AI insights endpoint.

use serde::{Deserialize, Serialize};

/// Request carrying the user's free-form prompt.
///
/// Emptiness is checked in the service so whitespace-only prompts are
/// rejected too.
#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    pub prompt: String,
}

/// Generated insight text.
#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insights: String,
}
