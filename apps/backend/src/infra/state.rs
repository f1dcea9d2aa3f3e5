use std::sync::Arc;

use crate::auth::authority::CredentialAuthority;
use crate::auth::credentials::StaticCredentialProvider;
use crate::auth::remote::RemoteTokenValidator;
use crate::auth::validator::{LocalTokenValidator, TokenValidator};
use crate::config::credentials::{self, CredentialEntry};
use crate::config::opt_var;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::auth_state::AuthState;
use crate::state::security_config::SecurityConfig;
use crate::state::survey_state::SurveyState;

/// Builder for the auth service state (used in both tests and main)
pub struct AuthStateBuilder {
    security_config: Option<SecurityConfig>,
    users: Option<Vec<CredentialEntry>>,
}

impl AuthStateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: None,
            users: None,
        }
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    pub fn with_users(mut self, users: Vec<CredentialEntry>) -> Self {
        self.users = Some(users);
        self
    }

    /// Unset parts are read from `JWT_SECRET` and `AUTH_USERS`.
    pub fn build(self) -> Result<AuthState, AppError> {
        let security = match self.security_config {
            Some(s) => s,
            None => SecurityConfig::from_env()?,
        };
        let users = match self.users {
            Some(u) => u,
            None => credentials::from_env()?,
        };
        let provider = StaticCredentialProvider::provision(&users)?;
        let authority = CredentialAuthority::new(Arc::new(provider), security)?;
        Ok(AuthState::new(authority))
    }
}

impl Default for AuthStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the survey service state (used in both tests and main)
pub struct SurveyStateBuilder {
    db_url: Option<String>,
    validator: Option<Arc<dyn TokenValidator>>,
}

impl SurveyStateBuilder {
    pub fn new() -> Self {
        Self {
            db_url: None,
            validator: None,
        }
    }

    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn TokenValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Unset parts are read from `DATABASE_URL` and
    /// `AUTH_SERVICE_URL` / `JWT_SECRET`.
    pub async fn build(self) -> Result<SurveyState, AppError> {
        let validator = match self.validator {
            Some(v) => v,
            None => validator_from_env()?,
        };
        let url = match self.db_url {
            Some(url) => url,
            None => crate::config::db::database_url()?,
        };
        // single entrypoint: connect + migrate
        let db = bootstrap_db(&url).await?;
        Ok(SurveyState::new(db, validator))
    }
}

impl Default for SurveyStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote validation when `AUTH_SERVICE_URL` is set, otherwise local
/// validation with `JWT_SECRET`.
pub fn validator_from_env() -> Result<Arc<dyn TokenValidator>, AppError> {
    if let Some(url) = opt_var("AUTH_SERVICE_URL") {
        tracing::info!(auth_service_url = %url, "validating tokens via auth service");
        return Ok(Arc::new(RemoteTokenValidator::new(&url)?));
    }
    if opt_var("JWT_SECRET").is_some() {
        tracing::info!("validating tokens locally with JWT_SECRET");
        return Ok(Arc::new(LocalTokenValidator::new(SecurityConfig::from_env()?)));
    }
    Err(AppError::config(
        "Either AUTH_SERVICE_URL or JWT_SECRET must be set to validate tokens",
    ))
}

pub fn build_auth_state() -> AuthStateBuilder {
    AuthStateBuilder::new()
}

pub fn build_survey_state() -> SurveyStateBuilder {
    SurveyStateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::credentials::parse_auth_users;

    #[tokio::test]
    async fn auth_state_builds_from_explicit_parts() {
        let state = build_auth_state()
            .with_security(SecurityConfig::new("builder-secret"))
            .with_users(parse_auth_users("alice:pw:admin").unwrap())
            .build()
            .unwrap();
        let issued = state.authority.login("alice", "pw").await.unwrap();
        assert_eq!(issued.claims.sub, "alice");
    }

    #[tokio::test]
    async fn survey_state_builds_on_in_memory_store() {
        let validator: Arc<dyn TokenValidator> =
            Arc::new(LocalTokenValidator::new(SecurityConfig::new("builder-secret")));
        let state = build_survey_state()
            .with_db_url("sqlite::memory:")
            .with_validator(validator)
            .build()
            .await
            .unwrap();
        assert_eq!(crate::infra::db::db_status(&state.db).await, "connected");
    }
}
