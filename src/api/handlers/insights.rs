//! Handler for the AI insights endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::insights::{InsightRequest, InsightResponse};
use crate::api::handlers::analytics::analytics_service;
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::InsightService;
use crate::error::AppError;
use crate::state::AppState;

/// Generates AI insight text over the user's full analytics.
///
/// # Endpoint
///
/// `POST /api/v1/ai/insights`
///
/// # Request Body
///
/// ```json
/// {"prompt": "Which of my links performs best?"}
/// ```
///
/// # Response
///
/// ```json
/// {"insights": "..."}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an empty or whitespace-only prompt.
/// Returns 502 Bad Gateway when generation fails upstream.
pub async fn insights_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<InsightRequest>,
) -> Result<Json<InsightResponse>, AppError> {
    let analytics = analytics_service(&state, user.id)
        .all_links_analytics()
        .await?;

    let insights = InsightService::new(state.insight_client.clone())
        .generate(&analytics, &payload.prompt)
        .await?;

    Ok(Json(InsightResponse { insights }))
}
