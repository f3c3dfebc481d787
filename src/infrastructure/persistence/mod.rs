//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage and lookup
//! - [`PgLinkRepository`] - Link storage, owner-scoped retrieval and mutation
//! - [`PgAnalyticsRepository`] - Click event storage and aggregation queries

pub mod pg_analytics_repository;
pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_analytics_repository::PgAnalyticsRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
