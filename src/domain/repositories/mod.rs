//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in `crate::infrastructure`. Mock implementations are generated via
//! `mockall` for `cfg(test)`.
//!
//! - [`UserRepository`] - Account storage
//! - [`LinkRepository`] - Owner-scoped link CRUD plus public lookup
//! - [`AnalyticsRepository`] - Click recording and aggregation
//! - [`InsightClient`] - External text-generation boundary

pub mod analytics_repository;
pub mod insight_client;
pub mod link_repository;
pub mod user_repository;

pub use analytics_repository::{AnalyticsRepository, DayClicks, SourceClicks};
pub use insight_client::InsightClient;
pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use insight_client::MockInsightClient;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
