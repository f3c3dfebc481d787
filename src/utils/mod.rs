//! Shared primitives used across the application:
//!
//! - [`idcodec`] - Reversible public identifier codec
//! - [`password`] - Argon2 password hashing
//! - [`jwt`] - Signed access/refresh token issuance and verification
//! - [`validators`] - Username and password policy checks

pub mod idcodec;
pub mod jwt;
pub mod password;
pub mod validators;
