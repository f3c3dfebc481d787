//! Registration, credential verification, and token issuance.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::idcodec::IdCodec;
use crate::utils::jwt::{TokenError, TokenService, TOKEN_TYPE_ACCESS};
use crate::utils::password::{hash_password, verify_password};

/// Token pair minted on successful authentication.
///
/// The refresh token is delivered only via a protected cookie, never in a
/// response body.
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Public identifier the tokens were minted for.
    pub public_id: String,
}

/// Service for account registration and request authentication.
///
/// Token subjects are always public identifiers, so raw row ids never leave
/// the process.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
    codec: IdCodec,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService, codec: IdCodec) -> Self {
        Self {
            users,
            tokens,
            codec,
        }
    }

    /// Registers a new account. Usernames are stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the username is taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.to_lowercase();

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already registered",
                json!({ "username": username }),
            ));
        }

        let password_hash = hash_password(password)
            .map_err(|e| AppError::internal("Failed to hash password", json!({ "reason": e.to_string() })))?;

        self.users
            .create(NewUser {
                username,
                password_hash,
            })
            .await
    }

    /// Verifies credentials and mints an access/refresh token pair.
    ///
    /// A missing user and a wrong password are deliberately indistinguishable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on credential mismatch.
    pub async fn login(&self, username: &str, password: &str) -> Result<(IssuedTokens, User), AppError> {
        let invalid = || AppError::unauthorized("Invalid credentials", json!({}));

        let user = self
            .users
            .find_by_username(&username.to_lowercase())
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(password, &user.password_hash) {
            return Err(invalid());
        }

        let public_id = self.codec.encode(user.id);
        let access_token = self.mint(|s| self.tokens.create_access_token(s), &public_id)?;
        let refresh_token = self.mint(|s| self.tokens.create_refresh_token(s), &public_id)?;

        Ok((
            IssuedTokens {
                access_token,
                refresh_token,
                public_id,
            },
            user,
        ))
    }

    /// Authenticates a bearer token and loads the user it was minted for.
    ///
    /// Only access tokens are accepted here; a refresh token presented as a
    /// bearer credential is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for expired, malformed, or
    /// wrong-typed tokens and for subjects with no live user.
    pub async fn current_user(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token).map_err(|e| match e {
            TokenError::Expired => AppError::unauthorized("Token has expired", json!({})),
            TokenError::Invalid => AppError::unauthorized("Invalid token", json!({})),
        })?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AppError::unauthorized(
                "Invalid token",
                json!({ "reason": "not an access token" }),
            ));
        }

        let user_id = self
            .codec
            .decode(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid token", json!({})))?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found", json!({})))
    }

    fn mint(
        &self,
        create: impl Fn(&str) -> Result<String, TokenError>,
        public_id: &str,
    ) -> Result<String, AppError> {
        create(public_id)
            .map_err(|e| AppError::internal("Failed to sign token", json!({ "reason": e.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;
    use jsonwebtoken::Algorithm;

    fn token_service() -> TokenService {
        TokenService::new("test-jwt-secret", Algorithm::HS256, 15, 30)
    }

    fn codec() -> IdCodec {
        IdCodec::new("test-salt", 8)
    }

    fn stored_user(id: i64, username: &str, password: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .withf(|u| u == "alice")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new_user| new_user.username == "alice" && new_user.password_hash != "Sup3r$ecret!")
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: 1,
                    username: new_user.username,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now(),
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let user = service.register("Alice", "Sup3r$ecret!").await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user(1, "alice", "Sup3r$ecret!"))));

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let result = service.register("alice", "An0ther!pass").await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_login_issues_token_pair_for_public_id() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user(7, "alice", "Sup3r$ecret!"))));

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let (tokens, user) = service.login("alice", "Sup3r$ecret!").await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(tokens.public_id, codec().encode(7));
        // The opaque id never matches the raw row id rendering.
        assert_ne!(tokens.public_id, "7");

        let claims = token_service().verify(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, tokens.public_id);
        assert_eq!(claims.token_type, "access");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user(7, "alice", "Sup3r$ecret!"))));

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let result = service.login("alice", "wrong-password").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let result = service.login("nobody", "Sup3r$ecret!").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_current_user_roundtrip() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user(7, "alice", "Sup3r$ecret!"))));
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| Ok(Some(stored_user(id, "alice", "Sup3r$ecret!"))));

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let (tokens, _) = service.login("alice", "Sup3r$ecret!").await.unwrap();
        let user = service.current_user(&tokens.access_token).await.unwrap();
        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn test_current_user_rejects_refresh_token() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user(7, "alice", "Sup3r$ecret!"))));

        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let (tokens, _) = service.login("alice", "Sup3r$ecret!").await.unwrap();
        let result = service.current_user(&tokens.refresh_token).await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_current_user_rejects_garbage() {
        let mock_repo = MockUserRepository::new();
        let service = AuthService::new(Arc::new(mock_repo), token_service(), codec());

        let result = service.current_user("not.a.token").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }
}
