//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login, and token verification
//! - [`services::link_service::LinkService`] - Owner-scoped link management
//! - [`services::redirect_service::RedirectService`] - Public short-link resolution
//! - [`services::analytics_service::AnalyticsService`] - Click analytics aggregation
//! - [`services::insight_service::InsightService`] - AI-generated analytics insights

pub mod services;
