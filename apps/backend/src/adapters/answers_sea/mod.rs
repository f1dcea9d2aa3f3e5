//! SeaORM adapter for answers - generic over ConnectionTrait.
//!
//! Answers are append-only: there is no update or delete path.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::answers;

pub mod dto;

pub use dto::AnswerCreate;

pub async fn create_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AnswerCreate,
) -> Result<answers::Model, sea_orm::DbErr> {
    let answer_active = answers::ActiveModel {
        id: NotSet,
        survey_id: Set(dto.survey_id),
        question_id: Set(dto.question_id),
        user_id: Set(dto.user_id),
        answer: Set(dto.answer),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    answer_active.insert(conn).await
}

pub async fn list_for_survey<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Vec<answers::Model>, sea_orm::DbErr> {
    answers::Entity::find()
        .filter(answers::Column::SurveyId.eq(survey_id))
        .order_by_asc(answers::Column::Id)
        .all(conn)
        .await
}
