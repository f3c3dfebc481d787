//! Language-model client implementations.
//!
//! - [`GeminiClient`] - Gemini `generateContent` REST client
//! - [`DisabledInsightClient`] - Fallback when no API key is configured

pub mod disabled;
pub mod gemini;

pub use disabled::DisabledInsightClient;
pub use gemini::GeminiClient;
