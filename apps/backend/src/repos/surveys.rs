//! Survey and question repository functions for the domain layer.

use std::fmt;
use std::str::FromStr;

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::adapters::{questions_sea, surveys_sea};
use crate::entities::{questions, surveys};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Survey domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Survey {
    pub id: i64,
    pub title: String,
    #[serde(skip)]
    pub created_at: time::OffsetDateTime,
}

impl From<surveys::Model> for Survey {
    fn from(model: surveys::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Radio,
    Checkbox,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Radio => "radio",
            QuestionType::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(QuestionType::Text),
            "radio" => Ok(QuestionType::Radio),
            "checkbox" => Ok(QuestionType::Checkbox),
            other => Err(format!("unknown question type '{other}'")),
        }
    }
}

/// Question domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub survey_id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub options: Vec<String>,
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        let kind = model.kind.parse().unwrap_or_else(|e| {
            warn!(question_id = model.id, error = %e, "treating question as free text");
            QuestionType::Text
        });
        let options = decode_options(model.id, model.options.as_deref());
        Self {
            id: model.id,
            survey_id: model.survey_id,
            text: model.text,
            kind,
            options,
        }
    }
}

/// Decode the stored JSON option list. Text that is not JSON, or JSON that
/// is not an array of strings, degrades to an empty list with a warning.
pub fn decode_options(question_id: i64, raw: Option<&str>) -> Vec<String> {
    let raw = match raw.map(str::trim) {
        None | Some("") | Some("null") => return Vec::new(),
        Some(raw) => raw,
    };
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|e| {
        warn!(question_id, error = %e, "question options are not a string list");
        Vec::new()
    })
}

/// All surveys, ascending by id.
pub async fn list_surveys<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Survey>, DomainError> {
    let rows = surveys_sea::list_all(conn).await?;
    Ok(rows.into_iter().map(Survey::from).collect())
}

pub async fn find_survey<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Option<Survey>, DomainError> {
    let row = surveys_sea::find_by_id(conn, survey_id).await?;
    Ok(row.map(Survey::from))
}

/// Find survey by ID or return a survey-not-found error.
pub async fn require_survey<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Survey, DomainError> {
    find_survey(conn, survey_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Survey, format!("Survey {survey_id} not found"))
    })
}

/// Questions of one survey, ascending by id.
pub async fn list_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Vec<Question>, DomainError> {
    let rows = questions_sea::list_for_survey(conn, survey_id).await?;
    Ok(rows.into_iter().map(Question::from).collect())
}

pub async fn question_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    survey_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(questions_sea::ids_for_survey(conn, survey_id).await?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_options_accepts_string_arrays() {
        let opts = decode_options(1, Some(r#"["Лекции", "Практика"]"#));
        assert_eq!(opts, vec!["Лекции".to_string(), "Практика".to_string()]);
    }

    #[test]
    fn decode_options_treats_missing_as_empty() {
        assert!(decode_options(1, None).is_empty());
        assert!(decode_options(1, Some("null")).is_empty());
        assert!(decode_options(1, Some("")).is_empty());
    }

    #[test]
    fn decode_options_degrades_on_bad_shape() {
        assert!(decode_options(1, Some(r#"{"a": 1}"#)).is_empty());
        assert!(decode_options(1, Some("[1, 2, 3]")).is_empty());
    }

    #[test]
    fn decode_options_degrades_on_invalid_json() {
        assert!(decode_options(1, Some("not json")).is_empty());
        assert!(decode_options(1, Some(r#"["open""#)).is_empty());
    }

    #[test]
    fn question_serializes_kind_as_type() {
        let q = Question {
            id: 1,
            survey_id: 1,
            text: "Q".into(),
            kind: QuestionType::Radio,
            options: vec!["a".into()],
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["type"], "radio");
        assert_eq!(v["options"], json!(["a"]));
    }

    #[test]
    fn unknown_kind_loads_as_text() {
        let q = Question::from(questions::Model {
            id: 7,
            survey_id: 1,
            text: "Q".into(),
            kind: "slider".into(),
            options: None,
        });
        assert_eq!(q.kind, QuestionType::Text);
    }
}
