//! SeaORM adapter for questions - generic over ConnectionTrait.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::questions;

pub async fn list_for_survey<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::SurveyId.eq(survey_id))
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

/// Ids of the questions belonging to one survey, ascending.
pub async fn ids_for_survey<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    questions::Entity::find()
        .select_only()
        .column(questions::Column::Id)
        .filter(questions::Column::SurveyId.eq(survey_id))
        .order_by_asc(questions::Column::Id)
        .into_tuple::<i64>()
        .all(conn)
        .await
}
