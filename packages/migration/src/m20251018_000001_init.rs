use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
pub(crate) enum Surveys {
    Table,
    Id,
    Title,
    CreatedAt,
}

#[derive(Iden)]
pub(crate) enum Questions {
    Table,
    Id,
    SurveyId,
    Text,
    Type,
    Options,
}

#[derive(Iden)]
enum Answers {
    Table,
    Id,
    SurveyId,
    QuestionId,
    UserId,
    Answer,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // surveys
        manager
            .create_table(
                Table::create()
                    .table(Surveys::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Surveys::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Surveys::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Surveys::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // questions: survey_id must always resolve to a live survey
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Questions::SurveyId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(ColumnDef::new(Questions::Type).string_len(50).not_null())
                    .col(ColumnDef::new(Questions::Options).json().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_survey_id")
                            .from(Questions::Table, Questions::SurveyId)
                            .to(Surveys::Table, Surveys::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_questions_survey_id")
                    .table(Questions::Table)
                    .col(Questions::SurveyId)
                    .to_owned(),
            )
            .await?;

        // answers: append-only, no uniqueness on (user_id, question_id)
        manager
            .create_table(
                Table::create()
                    .table(Answers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Answers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Answers::SurveyId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::QuestionId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::UserId).string_len(100).not_null())
                    .col(ColumnDef::new(Answers::Answer).text().not_null())
                    .col(
                        ColumnDef::new(Answers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_answers_survey_id")
                    .table(Answers::Table)
                    .col(Answers::SurveyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_answers_survey_id")
                    .table(Answers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Answers::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_questions_survey_id")
                    .table(Questions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Surveys::Table).to_owned())
            .await?;

        Ok(())
    }
}
