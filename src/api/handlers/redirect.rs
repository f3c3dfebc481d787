//! Handler for public short link redirect.

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::application::services::RedirectService;
use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters recognized on the redirect path. Everything else is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub utm_source: Option<String>,
}

/// Redirects a public identifier to its destination URL.
///
/// # Endpoint
///
/// `GET /{public_id}?utm_source=...`
///
/// # Request Flow
///
/// 1. Decode the identifier and load the link
/// 2. Send a click event to the background worker
/// 3. Return the configured redirect status with a Location header
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing. If the
/// queue is full, the click is dropped (fire-and-forget); the redirect never
/// waits on recording.
///
/// # Errors
///
/// Returns 404 Not Found when the identifier does not decode or no link
/// matches. The two cases are indistinguishable on this public path.
pub async fn redirect_handler(
    Path(public_id): Path<String>,
    Query(query): Query<RedirectQuery>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = RedirectService::new(state.links.clone(), state.codec.clone())
        .resolve(&public_id)
        .await?;

    // Send click event for async processing
    let click_event = ClickEvent::new(
        link.id,
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        query.utm_source.as_deref(),
    );

    let _ = state.click_tx.try_send(click_event);

    Ok((
        state.redirect_status,
        [(header::LOCATION, link.url)],
    ))
}
