//! Shared application state injected into handlers.

use std::sync::Arc;

use axum::http::StatusCode;
use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::AuthService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{
    AnalyticsRepository, InsightClient, LinkRepository, UserRepository,
};
use crate::utils::idcodec::IdCodec;

/// State shared across all request handlers.
///
/// Repositories are held behind trait objects so integration tests can swap
/// in in-memory implementations. Per-request services are constructed in the
/// handlers from these parts.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub users: Arc<dyn UserRepository>,
    pub links: Arc<dyn LinkRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub insight_client: Arc<dyn InsightClient>,
    pub auth_service: Arc<AuthService>,
    pub codec: IdCodec,
    pub base_url: String,
    /// Status code used by the public redirect endpoint.
    pub redirect_status: StatusCode,
    pub click_tx: mpsc::Sender<ClickEvent>,
}
