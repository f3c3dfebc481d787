//! Owner-scoped link management.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::idcodec::IdCodec;

/// Service for creating and maintaining a user's links.
///
/// Constructed per request with the authenticated owner's id, so every
/// repository call is scoped mechanically; there is no way to reach another
/// user's rows through this service. A link owned by someone else resolves
/// exactly like a missing one.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    codec: IdCodec,
    owner_id: i64,
}

impl LinkService {
    /// Creates a service bound to the authenticated owner.
    pub fn new(links: Arc<dyn LinkRepository>, codec: IdCodec, owner_id: i64) -> Self {
        Self {
            links,
            codec,
            owner_id,
        }
    }

    /// Creates a link and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, title: String, url: String) -> Result<Link, AppError> {
        self.links
            .create(NewLink {
                user_id: self.owner_id,
                title,
                url,
            })
            .await
    }

    /// Lists all links owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.links.list_by_user(self.owner_id).await
    }

    /// Retrieves one owned link by its public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] when the identifier does not
    /// decode, [`AppError::NotFound`] when no owned row matches.
    pub async fn get(&self, public_id: &str) -> Result<Link, AppError> {
        let id = self.decode(public_id)?;

        self.links
            .find_by_id_and_user(id, self.owner_id)
            .await?
            .ok_or_else(|| Self::link_not_found(public_id))
    }

    /// Partially updates an owned link; only provided fields change.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn update(&self, public_id: &str, patch: LinkPatch) -> Result<Link, AppError> {
        let id = self.decode(public_id)?;

        if patch.is_empty() {
            // Nothing to change; still enforce existence and ownership.
            return self.get(public_id).await;
        }

        self.links
            .update(id, self.owner_id, patch)
            .await?
            .ok_or_else(|| Self::link_not_found(public_id))
    }

    /// Deletes an owned link; its click events cascade in the store.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn delete(&self, public_id: &str) -> Result<(), AppError> {
        let id = self.decode(public_id)?;

        if !self.links.delete(id, self.owner_id).await? {
            return Err(Self::link_not_found(public_id));
        }

        Ok(())
    }

    fn decode(&self, public_id: &str) -> Result<i64, AppError> {
        self.codec.decode(public_id).map_err(|_| {
            AppError::invalid_identifier("Invalid public ID", json!({ "id": public_id }))
        })
    }

    fn link_not_found(public_id: &str) -> AppError {
        AppError::not_found("Link not found", json!({ "id": public_id }))
    }
}
