use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::bearer::parse_bearer;
use crate::AppError;

/// Bearer token extracted from the Authorization header
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// `Ok(None)` when no Authorization header is present at all; a header
    /// that is present but not `Bearer <token>` is an error.
    pub fn from_headers(req: &HttpRequest) -> Result<Option<Self>, AppError> {
        let Some(value) = req.headers().get(header::AUTHORIZATION) else {
            return Ok(None);
        };
        let value = value.to_str().map_err(|_| AppError::InvalidToken)?;
        let token = parse_bearer(value)?;
        Ok(Some(AuthToken {
            token: token.to_string(),
        }))
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match Self::from_headers(req) {
            Ok(Some(token)) => Ok(token),
            Ok(None) | Err(AppError::MissingToken) => Err(AppError::Unauthorized),
            Err(e) => Err(e),
        })
    }
}
