//! `AUTH_USERS` parsing: the static credential table of the auth service.

use std::fmt;

use tracing::warn;

use crate::auth::claims::Role;
use crate::config::opt_var;
use crate::error::AppError;

/// Table used when `AUTH_USERS` is not set.
pub const DEFAULT_AUTH_USERS: &str = "admin:admin123:admin,user:user123:user";

/// One provisioned login, still holding the plaintext password.
///
/// Lives only until the provider hashes it at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Read the credential table from `AUTH_USERS`, falling back to the built-in
/// demo logins with a warning.
pub fn from_env() -> Result<Vec<CredentialEntry>, AppError> {
    match opt_var("AUTH_USERS") {
        Some(raw) => parse_auth_users(&raw),
        None => {
            warn!("AUTH_USERS not set; provisioning the default demo logins");
            parse_auth_users(DEFAULT_AUTH_USERS)
        }
    }
}

/// Parse a `username:password:role` comma list.
///
/// The password is everything between the first and the last colon, so it
/// may itself contain colons.
pub fn parse_auth_users(raw: &str) -> Result<Vec<CredentialEntry>, AppError> {
    let mut entries: Vec<CredentialEntry> = Vec::new();

    for (idx, item) in raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        let (username, rest) = item.split_once(':').ok_or_else(|| entry_error(idx))?;
        let (password, role) = rest.rsplit_once(':').ok_or_else(|| entry_error(idx))?;

        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(entry_error(idx));
        }

        let role: Role = role.trim().parse().map_err(|_| {
            AppError::config(format!(
                "AUTH_USERS entry {} has unknown role '{}'",
                idx + 1,
                role.trim()
            ))
        })?;

        if entries.iter().any(|e| e.username == username) {
            return Err(AppError::config(format!(
                "AUTH_USERS lists '{username}' more than once"
            )));
        }

        entries.push(CredentialEntry {
            username: username.to_string(),
            password: password.to_string(),
            role,
        });
    }

    if entries.is_empty() {
        return Err(AppError::config("AUTH_USERS contains no usable entries"));
    }
    Ok(entries)
}

fn entry_error(idx: usize) -> AppError {
    AppError::config(format!(
        "AUTH_USERS entry {} must look like username:password:role",
        idx + 1
    ))
}
