//! Handlers for registration and login endpoints.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::api::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and logs it in.
///
/// # Endpoint
///
/// `POST /api/v1/auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "alice_b",
///   "password": "Str0ng!pass"
/// }
/// ```
///
/// # Response
///
/// Same shape as login: an access token in the body, the refresh token in
/// an http-only `refresh_token` cookie.
///
/// # Errors
///
/// Returns 400 Bad Request if the username or password violates policy.
/// Returns 409 Conflict if the username is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    payload.validate()?;

    state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    issue_session(&state, jar, &payload.username, &payload.password).await
}

/// Logs into an existing account.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Errors
///
/// Returns 401 Unauthorized for any credential mismatch, without revealing
/// whether the username exists.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    issue_session(&state, jar, &payload.username, &payload.password).await
}

async fn issue_session(
    state: &AppState,
    jar: CookieJar,
    username: &str,
    password: &str,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let (tokens, user) = state.auth_service.login(username, password).await?;

    let cookie = Cookie::build(("refresh_token", tokens.refresh_token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let body = AuthResponse::bearer(tokens.access_token, user.username, tokens.public_id);

    Ok((jar.add(cookie), Json(body)))
}
