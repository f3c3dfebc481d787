//! DTOs for registration and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validators::{validate_password, validate_username};

/// Request to register a new account.
///
/// Username and password are checked against the account policy before the
/// service layer sees them.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = validate_username))]
    pub username: String,

    #[validate(custom(function = validate_password))]
    pub password: String,
}

/// Request to log into an existing account.
///
/// No policy validation here: whatever the client sends is checked against
/// the stored credentials, and a mismatch is always the same 401.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for both registration and login.
///
/// The refresh token travels in an http-only cookie, never in the body.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub username: String,
    /// Public identifier of the account, also the token subject.
    pub id: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(access_token: String, username: String, id: String) -> Self {
        Self {
            access_token,
            username,
            id,
            token_type: "bearer".to_string(),
        }
    }
}
