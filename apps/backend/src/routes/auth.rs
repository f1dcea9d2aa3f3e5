use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::claims::Role;
use crate::error::AppError;
use crate::extractors::{AuthToken, ValidatedJson};
use crate::state::auth_state::AuthState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
    pub role: Role,
    /// Expiry (seconds since epoch)
    pub expires: i64,
}

#[derive(Debug, Deserialize)]
struct ValidateQuery {
    token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub user: String,
    pub role: Role,
    pub exp: i64,
}

/// Exchange a username/password pair for a 24-hour access token.
async fn login(
    body: ValidatedJson<LoginRequest>,
    state: web::Data<AuthState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { username, password } = body.into_inner();
    let issued = state.authority.login(&username, &password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: issued.token,
        user: issued.claims.sub,
        role: issued.claims.role,
        expires: issued.claims.exp,
    }))
}

/// Token from `?token=` first, then from a Bearer header.
fn token_from_request(req: &HttpRequest) -> Result<String, AppError> {
    let query = web::Query::<ValidateQuery>::from_query(req.query_string())
        .map_err(|_| AppError::malformed("Invalid query string"))?;
    if let Some(token) = query.into_inner().token.filter(|t| !t.is_empty()) {
        return Ok(token);
    }
    match AuthToken::from_headers(req)? {
        Some(auth) => Ok(auth.token),
        None => Err(AppError::MissingToken),
    }
}

async fn validate(req: HttpRequest, state: web::Data<AuthState>) -> Result<HttpResponse, AppError> {
    let token = token_from_request(&req)?;
    let claims = state.authority.validate(&token)?;

    Ok(HttpResponse::Ok().json(ValidateResponse {
        valid: true,
        user: claims.sub,
        role: claims.role,
        exp: claims.exp,
    }))
}

async fn user(token: AuthToken, state: web::Data<AuthState>) -> Result<HttpResponse, AppError> {
    let info = state.authority.user_info(&token.token).await?;
    Ok(HttpResponse::Ok().json(info))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/validate").route(web::get().to(validate)))
        .service(web::resource("/user").route(web::get().to(user)));
}
