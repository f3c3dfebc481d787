//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened links.
///
/// Every owner-scoped operation takes the owning user's numeric id alongside
/// the link id; ownership and existence are checked together so a link owned
/// by someone else is indistinguishable from a missing one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link and returns the persisted row including its
    /// store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Lists all links owned by a user, store-default order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Link>, AppError>;

    /// Finds a link by id, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id_and_user(&self, id: i64, user_id: i64)
        -> Result<Option<Link>, AppError>;

    /// Finds a link by id without ownership scoping. Redirects are public.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Partially updates an owned link. Only fields present in the patch
    /// change. Returns `None` if no owned row matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        user_id: i64,
        patch: LinkPatch,
    ) -> Result<Option<Link>, AppError>;

    /// Deletes an owned link; click events cascade in the store. Returns
    /// `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError>;
}
