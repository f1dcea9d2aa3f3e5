//! The validation capability the survey service depends on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::claims::{Claims, Role};
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Identity established by a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub role: Role,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            role: claims.role,
            exp: claims.exp,
        }
    }
}

/// Resolves a bearer token to a principal.
///
/// Errors are `MissingToken`, `InvalidToken` or, for remote validators,
/// `Upstream`.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<Principal, AppError>;
}

/// Verifies tokens in-process with the shared signing secret.
#[derive(Debug, Clone)]
pub struct LocalTokenValidator {
    security: SecurityConfig,
}

impl LocalTokenValidator {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}

#[async_trait]
impl TokenValidator for LocalTokenValidator {
    async fn validate(&self, token: &str) -> Result<Principal, AppError> {
        verify_access_token(token, &self.security).map(Principal::from)
    }
}
