//! Boundary trait for the external text-generation collaborator.

use crate::error::AppError;
use async_trait::async_trait;

/// Forwards a fully assembled prompt to an external text-generation API.
///
/// The trait keeps the network call mockable; prompt assembly lives in
/// [`crate::application::services::InsightService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::ai::GeminiClient`] - Gemini REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightClient: Send + Sync {
    /// Generates text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the collaborator fails or returns
    /// an empty response.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
