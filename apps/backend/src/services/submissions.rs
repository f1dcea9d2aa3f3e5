//! Answer submission: per-row inserts with an explicit outcome report.

use std::collections::{BTreeMap, HashSet};

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::adapters::answers_sea::AnswerCreate;
use crate::errors::domain::DomainError;
use crate::repos::{answers, surveys};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Partial,
    Failed,
}

impl SubmissionStatus {
    /// `Success` when nothing failed (including an empty submission),
    /// `Failed` when nothing was saved but something failed, else `Partial`.
    pub fn classify(saved: usize, failed: usize) -> Self {
        match (saved, failed) {
            (_, 0) => SubmissionStatus::Success,
            (0, _) => SubmissionStatus::Failed,
            _ => SubmissionStatus::Partial,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            SubmissionStatus::Success => "Answers saved",
            SubmissionStatus::Partial => "Some answers could not be saved",
            SubmissionStatus::Failed => "No answers were saved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Key is not an integer or not a question of this survey
    UnknownQuestion,
    /// The insert itself failed
    StoreError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedAnswer {
    /// The key as submitted
    pub question_id: String,
    pub reason: FailureReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub status: SubmissionStatus,
    pub message: String,
    pub saved: usize,
    pub failed: Vec<FailedAnswer>,
}

impl SubmissionReport {
    pub fn new(saved: usize, failed: Vec<FailedAnswer>) -> Self {
        let status = SubmissionStatus::classify(saved, failed.len());
        Self {
            status,
            message: status.message().to_string(),
            saved,
            failed,
        }
    }
}

/// Submission domain service.
pub struct SubmissionService;

impl SubmissionService {
    pub fn new() -> Self {
        Self
    }

    /// Record `answers` (question id -> answer text) for `user_id`.
    ///
    /// Only an unknown survey or a failure to load its questions aborts the
    /// whole call; every other problem is reported per key.
    pub async fn submit<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        survey_id: i64,
        user_id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<SubmissionReport, DomainError> {
        surveys::require_survey(conn, survey_id).await?;
        let known: HashSet<i64> = surveys::question_ids(conn, survey_id)
            .await?
            .into_iter()
            .collect();

        let mut saved = 0usize;
        let mut failed = Vec::new();

        for (key, text) in answers {
            let question_id = match key.trim().parse::<i64>() {
                Ok(id) if known.contains(&id) => id,
                _ => {
                    failed.push(FailedAnswer {
                        question_id: key,
                        reason: FailureReason::UnknownQuestion,
                    });
                    continue;
                }
            };

            let dto = AnswerCreate::new(survey_id, question_id, user_id, text);
            match answers::create_answer(conn, dto).await {
                Ok(_) => saved += 1,
                Err(e) => {
                    warn!(survey_id, question_id, error = %e, "failed to save answer");
                    failed.push(FailedAnswer {
                        question_id: key,
                        reason: FailureReason::StoreError,
                    });
                }
            }
        }

        let report = SubmissionReport::new(saved, failed);
        info!(
            survey_id,
            user_id,
            saved = report.saved,
            failed = report.failed.len(),
            status = ?report.status,
            "answers submitted"
        );
        Ok(report)
    }
}

impl Default for SubmissionService {
    fn default() -> Self {
        Self::new()
    }
}
