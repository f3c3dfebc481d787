//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, and Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::ai::{DisabledInsightClient, GeminiClient};
use crate::infrastructure::persistence::{
    PgAnalyticsRepository, PgLinkRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::idcodec::IdCodec;
use crate::utils::jwt::TokenService;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Minimum length of generated public identifiers.
const PUBLIC_ID_MIN_LENGTH: usize = 8;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let links = Arc::new(PgLinkRepository::new(pool.clone()));
    let analytics = Arc::new(PgAnalyticsRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, analytics.clone()));
    tracing::info!("Click worker started");

    let codec = IdCodec::new(&config.codec_salt, PUBLIC_ID_MIN_LENGTH);

    let tokens = TokenService::new(
        &config.jwt_secret,
        config
            .jwt_algorithm
            .parse()
            .context("Unsupported JWT_ALGORITHM")?,
        config.access_token_expire_minutes,
        config.refresh_token_expire_days,
    );

    let auth_service = Arc::new(AuthService::new(users.clone(), tokens, codec.clone()));

    let insight_client: Arc<dyn crate::domain::repositories::InsightClient> =
        match &config.gemini_api_key {
            Some(key) => {
                tracing::info!("AI insights enabled (Gemini)");
                Arc::new(GeminiClient::new(key.clone()))
            }
            None => {
                tracing::info!("AI insights disabled (no API key)");
                Arc::new(DisabledInsightClient::new())
            }
        };

    let redirect_status = StatusCode::from_u16(config.redirect_status_code)
        .context("Unsupported REDIRECT_STATUS_CODE")?;

    let state = AppState {
        db: pool,
        users,
        links,
        analytics,
        insight_client,
        auth_service,
        codec,
        base_url: config.base_url.clone(),
        redirect_status,
        click_tx,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
