//! Answer repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::answers_sea::{self, AnswerCreate};
use crate::entities::answers;
use crate::errors::domain::DomainError;

/// Answer domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub id: i64,
    pub survey_id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub answer: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
}

impl From<answers::Model> for Answer {
    fn from(model: answers::Model) -> Self {
        Self {
            id: model.id,
            survey_id: model.survey_id,
            question_id: model.question_id,
            user_id: model.user_id,
            answer: model.answer,
            created_at: model.created_at,
        }
    }
}

pub async fn create_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AnswerCreate,
) -> Result<Answer, DomainError> {
    let row = answers_sea::create_answer(conn, dto).await?;
    Ok(Answer::from(row))
}

/// Answers of one survey, ascending by id.
pub async fn list_answers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Vec<Answer>, DomainError> {
    let rows = answers_sea::list_for_survey(conn, survey_id).await?;
    Ok(rows.into_iter().map(Answer::from).collect())
}
