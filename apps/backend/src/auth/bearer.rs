//! Scheme-aware parsing of `Authorization` header values.

use crate::error::AppError;

/// Extract the token from an `Authorization` value of the form
/// `Bearer <token>`.
///
/// The scheme is matched case-insensitively and exactly one non-empty token
/// must follow it. A blank value counts as a missing token; any other shape
/// is an invalid token.
pub fn parse_bearer(value: &str) -> Result<&str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::MissingToken);
    }

    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(AppError::MissingToken)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::InvalidToken);
    }

    match (parts.next(), parts.next()) {
        (Some(token), None) => Ok(token),
        (None, _) => Err(AppError::MissingToken),
        (Some(_), Some(_)) => Err(AppError::InvalidToken),
    }
}
