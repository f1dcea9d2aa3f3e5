//! Credential records and the provider seam the authority looks them up
//! through.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use tracing::info;

use crate::auth::claims::Role;
use crate::auth::password::hash_password;
use crate::config::credentials::CredentialEntry;
use crate::error::AppError;

/// First id handed out at provisioning.
pub const FIRST_USER_ID: i64 = 1001;

/// A provisioned login. Only the argon2 hash of the password is kept.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Lookup of credential records by username.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, AppError>;
}

/// Fixed in-memory credential table, built once at startup.
#[derive(Debug, Default)]
pub struct StaticCredentialProvider {
    records: HashMap<String, CredentialRecord>,
}

impl StaticCredentialProvider {
    /// Hash every entry's password and assign ids in declaration order.
    pub fn provision(entries: &[CredentialEntry]) -> Result<Self, AppError> {
        let mut records = HashMap::with_capacity(entries.len());
        for (offset, entry) in entries.iter().enumerate() {
            let password_hash = hash_password(&entry.password)
                .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
            let record = CredentialRecord {
                id: FIRST_USER_ID + offset as i64,
                username: entry.username.clone(),
                password_hash,
                role: entry.role,
            };
            records.insert(record.username.clone(), record);
        }
        info!(count = records.len(), "credential table provisioned");
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, AppError> {
        Ok(self.records.get(username).cloned())
    }
}
