//! Handlers for link management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, DeleteLinkResponse, LinkResponse, UpdateLinkRequest,
};
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::LinkService;
use crate::error::AppError;
use crate::state::AppState;

fn link_service(state: &AppState, user_id: i64) -> LinkService {
    LinkService::new(state.links.clone(), state.codec.clone(), user_id)
}

/// Creates a link owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "My blog",
///   "url": "https://example.com/blog"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the title or URL fails validation.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = link_service(&state, user.id)
        .create(payload.title, payload.url)
        .await?;

    Ok(Json(LinkResponse::from_link(
        &link,
        &state.codec,
        &state.base_url,
    )))
}

/// Lists all links owned by the authenticated user.
///
/// # Endpoint
///
/// `GET /api/v1/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = link_service(&state, user.id).list().await?;

    Ok(Json(
        links
            .iter()
            .map(|link| LinkResponse::from_link(link, &state.codec, &state.base_url))
            .collect(),
    ))
}

/// Fetches one owned link by public identifier.
///
/// # Endpoint
///
/// `GET /api/v1/links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for an identifier that does not decode.
/// Returns 404 Not Found when the link does not exist or belongs to
/// another user.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(public_id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = link_service(&state, user.id).get(&public_id).await?;

    Ok(Json(LinkResponse::from_link(
        &link,
        &state.codec,
        &state.base_url,
    )))
}

/// Partially updates one owned link.
///
/// # Endpoint
///
/// `PUT /api/v1/links/{id}`
///
/// Absent fields keep their stored values.
pub async fn update_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(public_id): Path<String>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = link_service(&state, user.id)
        .update(&public_id, payload.into())
        .await?;

    Ok(Json(LinkResponse::from_link(
        &link,
        &state.codec,
        &state.base_url,
    )))
}

/// Deletes one owned link and its recorded clicks.
///
/// # Endpoint
///
/// `DELETE /api/v1/links/{id}`
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(public_id): Path<String>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    link_service(&state, user.id).delete(&public_id).await?;

    Ok(Json(DeleteLinkResponse {
        detail: "Link deleted".to_string(),
    }))
}
