//! SeaORM adapter for surveys - generic over ConnectionTrait.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::surveys;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<surveys::Model>, sea_orm::DbErr> {
    surveys::Entity::find()
        .order_by_asc(surveys::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Option<surveys::Model>, sea_orm::DbErr> {
    surveys::Entity::find()
        .filter(surveys::Column::Id.eq(survey_id))
        .one(conn)
        .await
}
