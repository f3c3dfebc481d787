//! Signed access/refresh token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `type` claim discriminating the two token kinds.
pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Claims carried by both access and refresh tokens.
///
/// `sub` is the user's public identifier, never the raw row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies signed, time-bounded tokens.
///
/// Pure function of its inputs plus static configuration; safe to share and
/// call concurrently.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_minutes: i64,
    refresh_days: i64,
}

impl TokenService {
    pub fn new(secret: &str, algorithm: Algorithm, access_minutes: i64, refresh_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            access_minutes,
            refresh_days,
        }
    }

    /// Creates a short-lived access token for the given subject.
    pub fn create_access_token(&self, subject: &str) -> Result<String, TokenError> {
        self.create(subject, TOKEN_TYPE_ACCESS, Duration::minutes(self.access_minutes))
    }

    /// Creates a long-lived refresh token for the given subject.
    pub fn create_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        self.create(subject, TOKEN_TYPE_REFRESH, Duration::days(self.refresh_days))
    }

    fn create(&self, subject: &str, token_type: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            token_type: token_type.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Invalid)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Errors
    ///
    /// [`TokenError::Expired`] past the expiry instant, [`TokenError::Invalid`]
    /// for any other failure (bad signature, wrong algorithm, malformed).
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
