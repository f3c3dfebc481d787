//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access and external collaborator traits
//! - [`click_event`] - Click message passed to the background worker
//! - [`click_worker`] - Asynchronous click persistence worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves the link and responds immediately
//! 2. A [`click_event::ClickEvent`] is pushed to a bounded channel, never awaited
//! 3. [`click_worker::run_click_worker`] drains the channel on its own
//!    repository handle and persists each event
//! 4. Worker failures are logged and dropped, never surfaced to visitors

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
