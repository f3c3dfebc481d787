//! API route configuration.
//!
//! Auth routes are public; everything else under `/api/v1` requires Bearer
//! token authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    all_links_analytics_handler, create_link_handler, delete_link_handler, get_link_handler,
    insights_handler, link_analytics_handler, list_links_handler, login_handler,
    register_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/register` - Create an account and log it in
/// - `POST /auth/login`    - Log into an existing account
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
}

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /links`                       - Create a link
/// - `GET    /links`                       - List owned links
/// - `GET    /links/{id}`                  - Fetch one owned link
/// - `PUT    /links/{id}`                  - Partially update a link
/// - `DELETE /links/{id}`                  - Delete a link
/// - `GET    /analytics/link/{public_id}`  - Analytics for one link
/// - `GET    /analytics/all`               - Analytics for every owned link
/// - `POST   /ai/insights`                 - AI insight text over analytics
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/analytics/link/{public_id}", get(link_analytics_handler))
        .route("/analytics/all", get(all_links_analytics_handler))
        .route("/ai/insights", post(insights_handler))
}
