//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::auth::{
    AuthServiceError, Principal, hash_token, is_well_formed, repository::PgAuthRepository,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, token: &str) -> Result<Principal, AuthServiceError> {
        if !is_well_formed(token) {
            return Err(AuthServiceError::Malformed);
        }

        self.repository
            .find_principal_by_token_hash(&hash_token(token))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the user it was issued to.
    ///
    /// Tokens that could never have been issued fail with
    /// [`AuthServiceError::Malformed`] without touching the database.
    async fn authenticate_bearer(&self, token: &str) -> Result<Principal, AuthServiceError>;
}
