//! Environment-driven configuration for both services.

pub mod credentials;
pub mod db;
pub mod server;

use std::env;

use crate::error::AppError;

/// Get a required environment variable or return a configuration error.
pub fn must_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}

/// Get an optional environment variable, treating blank values as unset.
pub fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
