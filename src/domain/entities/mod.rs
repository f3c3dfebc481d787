//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! use separate `New*` structs; partial updates use `LinkPatch`.
//!
//! - [`User`] - A registered account
//! - [`Link`] - A shortened URL owned by a user
//! - [`LinkEvent`] - A recorded click on a link

pub mod click;
pub mod link;
pub mod user;

pub use click::{LinkEvent, NewLinkEvent};
pub use link::{Link, LinkPatch, NewLink};
pub use user::{NewUser, User};
