use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::infra::db::db_status;
use crate::state::survey_state::SurveyState;

#[derive(Debug, Serialize)]
struct AuthHealthResponse {
    status: &'static str,
    service: &'static str,
    /// Unix seconds
    time: i64,
}

#[derive(Debug, Serialize)]
struct SurveyHealthResponse {
    status: &'static str,
    service: &'static str,
    db: &'static str,
}

async fn auth_health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(AuthHealthResponse {
        status: "ok",
        service: "auth",
        time: OffsetDateTime::now_utc().unix_timestamp(),
    }))
}

/// Always 200 while the process is up; `db` reports store reachability.
async fn survey_health(state: web::Data<SurveyState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(SurveyHealthResponse {
        status: "ok",
        service: "core",
        db: db_status(&state.db).await,
    }))
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(auth_health));
}

pub fn configure_survey_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(survey_health));
}
