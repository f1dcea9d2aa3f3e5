//! Issues access tokens for provisioned logins and answers validation
//! requests for them.

use std::sync::Arc;
use std::time::SystemTime;

use serde::Serialize;
use tracing::{info, warn};

use crate::auth::claims::{Claims, Role};
use crate::auth::credentials::CredentialProvider;
use crate::auth::jwt::{mint_access_token, verify_access_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// A freshly minted token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Profile of the subject of a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub email: String,
}

pub struct CredentialAuthority {
    provider: Arc<dyn CredentialProvider>,
    security: SecurityConfig,
    /// Verified against for unknown usernames so both failure paths cost the same.
    dummy_hash: String,
}

impl CredentialAuthority {
    pub fn new(
        provider: Arc<dyn CredentialProvider>,
        security: SecurityConfig,
    ) -> Result<Self, AppError> {
        let dummy_hash = hash_password("dummy-password-for-unknown-users")
            .map_err(|e| AppError::internal(format!("Failed to hash dummy password: {e}")))?;
        Ok(Self {
            provider,
            security,
            dummy_hash,
        })
    }

    pub fn security(&self) -> &SecurityConfig {
        &self.security
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        self.login_at(username, password, SystemTime::now()).await
    }

    /// Check a username/password pair and mint a token issued at `now`.
    pub async fn login_at(
        &self,
        username: &str,
        password: &str,
        now: SystemTime,
    ) -> Result<IssuedToken, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::malformed("username and password are required"));
        }

        let record = self.provider.find_by_username(username).await?;
        let hash = match &record {
            Some(r) => r.password_hash.clone(),
            None => self.dummy_hash.clone(),
        };

        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Stored password hash unreadable: {e}")))?;

        let record = match record {
            Some(r) if matches => r,
            _ => {
                warn!(username, "login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let (token, claims) = mint_access_token(&record.username, record.role, now, &self.security)?;
        info!(username = %record.username, role = %record.role, "token issued");
        Ok(IssuedToken { token, claims })
    }

    /// Verify a token's signature and expiry.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        verify_access_token(token, &self.security)
    }

    /// Resolve a token to the profile of its (still provisioned) subject.
    pub async fn user_info(&self, token: &str) -> Result<UserInfo, AppError> {
        let claims = self.validate(token)?;
        let record = self
            .provider
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(UserInfo {
            id: record.id,
            email: format!("{}@example.com", record.username),
            username: record.username,
            role: record.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::auth::credentials::StaticCredentialProvider;
    use crate::config::credentials::{parse_auth_users, DEFAULT_AUTH_USERS};

    fn authority() -> CredentialAuthority {
        let entries = parse_auth_users(DEFAULT_AUTH_USERS).unwrap();
        let provider = StaticCredentialProvider::provision(&entries).unwrap();
        CredentialAuthority::new(Arc::new(provider), SecurityConfig::new("unit-test-secret")).unwrap()
    }

    #[tokio::test]
    async fn every_provisioned_login_validates() {
        let authority = authority();
        for (user, pass, role) in [("admin", "admin123", Role::Admin), ("user", "user123", Role::User)] {
            let issued = authority.login(user, pass).await.unwrap();
            assert!(!issued.token.is_empty());
            let claims = authority.validate(&issued.token).unwrap();
            assert_eq!(claims.sub, user);
            assert_eq!(claims.role, role);
        }
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let authority = authority();
        let wrong = authority.login("admin", "nope").await.unwrap_err();
        let unknown = authority.login("ghost", "admin123").await.unwrap_err();
        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn empty_fields_are_malformed() {
        let authority = authority();
        assert!(matches!(
            authority.login("", "admin123").await,
            Err(AppError::MalformedRequest { .. })
        ));
        assert!(matches!(
            authority.login("admin", "").await,
            Err(AppError::MalformedRequest { .. })
        ));
    }

    #[tokio::test]
    async fn token_issued_yesterday_is_invalid() {
        let authority = authority();
        let then = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
        let issued = authority.login_at("user", "user123", then).await.unwrap();
        assert!(matches!(
            authority.validate(&issued.token),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn user_info_reports_id_and_email() {
        let authority = authority();
        let issued = authority.login("user", "user123").await.unwrap();
        let info = authority.user_info(&issued.token).await.unwrap();
        assert_eq!(info.id, 1002);
        assert_eq!(info.username, "user");
        assert_eq!(info.email, "user@example.com");
        assert_eq!(info.role, Role::User);
    }

    #[tokio::test]
    async fn user_info_for_deprovisioned_subject_is_unauthorized() {
        let authority = authority();
        let (token, _) = mint_access_token(
            "former-employee",
            Role::User,
            SystemTime::now(),
            authority.security(),
        )
        .unwrap();
        assert!(matches!(
            authority.user_info(&token).await,
            Err(AppError::Unauthorized)
        ));
    }
}
