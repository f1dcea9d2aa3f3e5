use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{CurrentUser, SurveyId, ValidatedJson};
use crate::services::submissions::{SubmissionService, SubmissionStatus};
use crate::services::surveys::SurveyService;
use crate::state::survey_state::SurveyState;

async fn list_surveys(state: web::Data<SurveyState>) -> Result<HttpResponse, AppError> {
    let surveys = SurveyService::new().list(&state.db).await?;
    Ok(HttpResponse::Ok().json(surveys))
}

async fn get_survey(
    survey_id: SurveyId,
    state: web::Data<SurveyState>,
) -> Result<HttpResponse, AppError> {
    let detail = SurveyService::new().detail(&state.db, survey_id.0).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Body maps question ids (as strings) to answer text.
async fn submit_answers(
    survey_id: SurveyId,
    user: CurrentUser,
    body: ValidatedJson<BTreeMap<String, String>>,
    state: web::Data<SurveyState>,
) -> Result<HttpResponse, AppError> {
    let report = SubmissionService::new()
        .submit(&state.db, survey_id.0, &user.username, body.into_inner())
        .await?;

    let status = match report.status {
        SubmissionStatus::Failed => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionStatus::Success | SubmissionStatus::Partial => StatusCode::OK,
    };
    Ok(HttpResponse::build(status).json(report))
}

async fn list_answers(
    survey_id: SurveyId,
    user: CurrentUser,
    state: web::Data<SurveyState>,
) -> Result<HttpResponse, AppError> {
    user.require_admin()?;
    let answers = SurveyService::new().answers(&state.db, survey_id.0).await?;
    Ok(HttpResponse::Ok().json(answers))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_surveys)))
        .service(web::resource("/{survey_id}").route(web::get().to(get_survey)))
        .service(web::resource("/{survey_id}/submit").route(web::post().to(submit_answers)))
        .service(web::resource("/{survey_id}/answers").route(web::get().to(list_answers)));
}
