//! Handlers for analytics endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::{AllLinksAnalyticsResponse, LinkAnalyticsResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::AnalyticsService;
use crate::error::AppError;
use crate::state::AppState;

pub(crate) fn analytics_service(state: &AppState, user_id: i64) -> AnalyticsService {
    AnalyticsService::new(
        state.links.clone(),
        state.analytics.clone(),
        state.codec.clone(),
        state.base_url.clone(),
        user_id,
    )
}

/// Returns the analytics report for one owned link.
///
/// # Endpoint
///
/// `GET /api/v1/analytics/link/{public_id}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com",
///   "shortened_url": "http://localhost:3000/a1b2c3d4",
///   "total_clicks": 3,
///   "clicks_per_day": [{"day": "2026-08-01T00:00:00Z", "clicks": 2}],
///   "clicks_by_source": [{"source": "newsletter", "clicks": 2}]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an identifier that does not decode.
/// Returns 404 Not Found when no owned link matches.
pub async fn link_analytics_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(public_id): Path<String>,
) -> Result<Json<LinkAnalyticsResponse>, AppError> {
    let report = analytics_service(&state, user.id)
        .link_analytics(&public_id)
        .await?;

    Ok(Json(report.into()))
}

/// Returns analytics reports for every link the user owns.
///
/// # Endpoint
///
/// `GET /api/v1/analytics/all`
///
/// A user with no links gets `{"links": []}`.
pub async fn all_links_analytics_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<AllLinksAnalyticsResponse>, AppError> {
    let reports = analytics_service(&state, user.id).all_links_analytics().await?;

    Ok(Json(AllLinksAnalyticsResponse {
        links: reports.into_iter().map(Into::into).collect(),
    }))
}
