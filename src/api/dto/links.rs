//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkPatch};
use crate::utils::idcodec::IdCodec;

/// Request to create a link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Request to partially update a link. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(req: UpdateLinkRequest) -> Self {
        LinkPatch {
            title: req.title,
            url: req.url,
        }
    }
}

/// A link as exposed over the API. The numeric row id never leaves the
/// service; clients only ever see the public identifier.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub shortened_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: &Link, codec: &IdCodec, base_url: &str) -> Self {
        let public_id = codec.encode(link.id);
        Self {
            id: public_id.clone(),
            title: link.title.clone(),
            url: link.url.clone(),
            shortened_url: format!("{}/{}", base_url.trim_end_matches('/'), public_id),
            created_at: link.created_at,
        }
    }
}

/// Response for link deletion.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub detail: String,
}
