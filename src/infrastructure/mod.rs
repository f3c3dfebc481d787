//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound API calls.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`ai`] - Language-model client for insight generation

pub mod ai;
pub mod persistence;
