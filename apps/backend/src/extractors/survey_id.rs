use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Survey ID extracted from the `{survey_id}` route segment.
///
/// Only the shape is checked here; existence is up to the service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SurveyId(pub i64);

fn parse_survey_id(raw: Option<&str>) -> Result<SurveyId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidSurveyId, "Missing survey id parameter")
    })?;

    let survey_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidSurveyId, format!("Invalid survey id: {raw}"))
    })?;

    if survey_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidSurveyId,
            format!("Survey id must be positive, got: {survey_id}"),
        ));
    }

    Ok(SurveyId(survey_id))
}

impl FromRequest for SurveyId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_survey_id(req.match_info().get("survey_id")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_survey_id(Some("1")).unwrap(), SurveyId(1));
        assert_eq!(parse_survey_id(Some("42")).unwrap(), SurveyId(42));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive() {
        for raw in ["abc", "0", "-3", "1.5", ""] {
            let err = parse_survey_id(Some(raw)).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidSurveyId, "input {raw:?}");
        }
        assert!(parse_survey_id(None).is_err());
    }
}
