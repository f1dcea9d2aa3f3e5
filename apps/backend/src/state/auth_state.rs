use std::sync::Arc;

use crate::auth::authority::CredentialAuthority;

/// Shared state of the auth service.
#[derive(Clone)]
pub struct AuthState {
    pub authority: Arc<CredentialAuthority>,
}

impl AuthState {
    pub fn new(authority: CredentialAuthority) -> Self {
        Self {
            authority: Arc::new(authority),
        }
    }
}
