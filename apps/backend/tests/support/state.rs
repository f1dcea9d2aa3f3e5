//! State fixtures: every survey state gets its own freshly migrated
//! in-memory store.

use std::sync::Arc;
use std::time::SystemTime;

use backend::auth::validator::TokenValidator;
use backend::config::credentials::{parse_auth_users, DEFAULT_AUTH_USERS};
use backend::infra::state::{build_auth_state, build_survey_state};
use backend::{mint_access_token, AuthState, LocalTokenValidator, Role, SecurityConfig, SurveyState};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// Auth state provisioned with admin/admin123 and user/user123.
pub fn test_auth_state() -> AuthState {
    build_auth_state()
        .with_security(test_security())
        .with_users(parse_auth_users(DEFAULT_AUTH_USERS).expect("default users parse"))
        .build()
        .expect("auth state builds")
}

/// Survey state on a migrated `sqlite::memory:` store, validating tokens
/// locally with the test secret unless a validator is given.
pub async fn test_survey_state(validator: Option<Arc<dyn TokenValidator>>) -> SurveyState {
    let validator =
        validator.unwrap_or_else(|| Arc::new(LocalTokenValidator::new(test_security())));
    build_survey_state()
        .with_db_url("sqlite::memory:")
        .with_validator(validator)
        .build()
        .await
        .expect("survey state builds")
}

/// A token signed with the test secret, issued now.
pub fn token_for(username: &str, role: Role) -> String {
    mint_access_token(username, role, SystemTime::now(), &test_security())
        .expect("token mints")
        .0
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
