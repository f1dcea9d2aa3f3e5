//! Read-side survey services.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use crate::errors::domain::DomainError;
use crate::repos::answers::{self, Answer};
use crate::repos::surveys::{self, Question, Survey};

/// A survey with its questions, ascending by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyDetail {
    pub survey: Survey,
    pub questions: Vec<Question>,
}

/// Survey domain service.
pub struct SurveyService;

impl SurveyService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Survey>, DomainError> {
        surveys::list_surveys(conn).await
    }

    pub async fn detail<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        survey_id: i64,
    ) -> Result<SurveyDetail, DomainError> {
        let survey = surveys::require_survey(conn, survey_id).await?;
        let questions = surveys::list_questions(conn, survey_id).await?;
        debug!(survey_id, questions = questions.len(), "survey loaded");
        Ok(SurveyDetail { survey, questions })
    }

    /// Every answer recorded for a survey, ascending by id.
    pub async fn answers<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        survey_id: i64,
    ) -> Result<Vec<Answer>, DomainError> {
        surveys::require_survey(conn, survey_id).await?;
        answers::list_answers(conn, survey_id).await
    }
}

impl Default for SurveyService {
    fn default() -> Self {
        Self::new()
    }
}
