use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "survey_id")]
    pub survey_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// `text`, `radio` or `checkbox`; kept as a string so unknown kinds still load.
    #[sea_orm(column_name = "type")]
    pub kind: String,
    /// JSON array of option labels, read as raw text so a corrupt value
    /// fails only its own question when decoded.
    #[sea_orm(column_type = "Text", select_as = "text", nullable)]
    pub options: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::surveys::Entity",
        from = "Column::SurveyId",
        to = "super::surveys::Column::Id"
    )]
    Survey,
}

impl Related<super::surveys::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
