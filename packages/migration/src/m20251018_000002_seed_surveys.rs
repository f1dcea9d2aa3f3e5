//! First-boot seed data: the surveys shipped with the platform.
//!
//! Seeding is skipped when `surveys` already holds rows, so running the
//! migration against a populated store never duplicates content.

use sea_orm::prelude::TimeDateTimeWithTimeZone;
use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;
use serde_json::json;

use crate::m20251018_000001_init::{Questions, Surveys};

#[derive(DeriveMigrationName)]
pub struct Migration;

const COURSE_SURVEY: &str = "Оценка курса программирования";
const UNIVERSITY_SURVEY: &str = "Опрос об университете";

struct SeedQuestion {
    text: &'static str,
    kind: &'static str,
    options: &'static [&'static str],
}

const COURSE_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        text: "Как вы оцениваете сложность курса?",
        kind: "radio",
        options: &["Слишком легко", "В самый раз", "Слишком сложно"],
    },
    SeedQuestion {
        text: "Что понравилось больше всего?",
        kind: "checkbox",
        options: &["Лекции", "Практика", "Проект", "Преподаватель"],
    },
    SeedQuestion {
        text: "Ваши пожелания на будущее",
        kind: "text",
        options: &[],
    },
];

async fn survey_count(manager: &SchemaManager<'_>) -> Result<i64, DbErr> {
    let db = manager.get_connection();
    let select = Query::select()
        .expr_as(Expr::col(Surveys::Id).count(), Alias::new("cnt"))
        .from(Surveys::Table)
        .to_owned();
    let row = db.query_one(db.get_database_backend().build(&select)).await?;
    match row {
        Some(row) => row.try_get("", "cnt"),
        None => Ok(0),
    }
}

async fn insert_survey(manager: &SchemaManager<'_>, title: &str) -> Result<i64, DbErr> {
    let db = manager.get_connection();
    let insert = Query::insert()
        .into_table(Surveys::Table)
        .columns([Surveys::Title, Surveys::CreatedAt])
        .values([title.into(), TimeDateTimeWithTimeZone::now_utc().into()])
        .map_err(|e| DbErr::Custom(format!("seed survey values: {e}")))?
        .to_owned();
    manager.exec_stmt(insert).await?;

    // Look the id up by title instead of relying on RETURNING support.
    let select = Query::select()
        .column(Surveys::Id)
        .from(Surveys::Table)
        .and_where(Expr::col(Surveys::Title).eq(title))
        .order_by(Surveys::Id, Order::Desc)
        .limit(1)
        .to_owned();
    let row = db
        .query_one(db.get_database_backend().build(&select))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("seeded survey '{title}'")))?;
    row.try_get("", "id")
}

async fn insert_question(
    manager: &SchemaManager<'_>,
    survey_id: i64,
    question: &SeedQuestion,
) -> Result<(), DbErr> {
    let options = if question.options.is_empty() {
        None
    } else {
        Some(json!(question.options))
    };
    let insert = Query::insert()
        .into_table(Questions::Table)
        .columns([
            Questions::SurveyId,
            Questions::Text,
            Questions::Type,
            Questions::Options,
        ])
        .values([
            survey_id.into(),
            question.text.into(),
            question.kind.into(),
            options.into(),
        ])
        .map_err(|e| DbErr::Custom(format!("seed question values: {e}")))?
        .to_owned();
    manager.exec_stmt(insert).await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if survey_count(manager).await? > 0 {
            tracing::info!("surveys already present; skipping seed");
            return Ok(());
        }

        let course_id = insert_survey(manager, COURSE_SURVEY).await?;
        insert_survey(manager, UNIVERSITY_SURVEY).await?;

        for question in COURSE_QUESTIONS {
            insert_question(manager, course_id, question).await?;
        }

        tracing::info!(course_id, "seeded surveys");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let titles = [COURSE_SURVEY, UNIVERSITY_SURVEY];
        // questions go with their survey via ON DELETE CASCADE on postgres;
        // delete explicitly so sqlite without foreign_keys behaves the same.
        let survey_ids = Query::select()
            .column(Surveys::Id)
            .from(Surveys::Table)
            .and_where(Expr::col(Surveys::Title).is_in(titles))
            .to_owned();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Questions::Table)
                    .and_where(Expr::col(Questions::SurveyId).in_subquery(survey_ids))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Surveys::Table)
                    .and_where(Expr::col(Surveys::Title).is_in(titles))
                    .to_owned(),
            )
            .await
    }
}
