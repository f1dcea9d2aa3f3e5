//! DTOs for answers_sea adapter.

/// DTO for appending one answer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCreate {
    pub survey_id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub answer: String,
}

impl AnswerCreate {
    pub fn new(
        survey_id: i64,
        question_id: i64,
        user_id: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            survey_id,
            question_id,
            user_id: user_id.into(),
            answer: answer.into(),
        }
    }
}
