//! Public resolution of shortened links for redirects.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::idcodec::IdCodec;

/// Resolves public identifiers to links without ownership scoping.
///
/// Redirects are public: any visitor may follow any valid identifier. An
/// identifier that does not decode is reported exactly like a missing link,
/// so probing responses reveal nothing about the id space.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    codec: IdCodec,
}

impl RedirectService {
    pub fn new(links: Arc<dyn LinkRepository>, codec: IdCodec) -> Self {
        Self { links, codec }
    }

    /// Resolves a public identifier to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the identifier does not decode or
    /// no link with that id exists.
    pub async fn resolve(&self, public_id: &str) -> Result<Link, AppError> {
        let not_found = || AppError::not_found("Link not found", json!({ "id": public_id }));

        let id = self.codec.decode(public_id).map_err(|_| not_found())?;

        self.links.find_by_id(id).await?.ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn codec() -> IdCodec {
        IdCodec::new("test-salt", 8)
    }

    #[tokio::test]
    async fn test_resolve_ignores_ownership() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|id| {
                Ok(Some(Link {
                    id,
                    user_id: 99,
                    title: "Example".to_string(),
                    url: "https://example.com/target".to_string(),
                    created_at: Utc::now(),
                }))
            });

        let service = RedirectService::new(Arc::new(mock_repo), codec());

        let link = service.resolve(&codec().encode(10)).await.unwrap();
        assert_eq!(link.url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_undecodable_is_not_found() {
        let mock_repo = MockLinkRepository::new();
        let service = RedirectService::new(Arc::new(mock_repo), codec());

        let result = service.resolve("garbage!!").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_missing_row_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = RedirectService::new(Arc::new(mock_repo), codec());

        let result = service.resolve(&codec().encode(10)).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
