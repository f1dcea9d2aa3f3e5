//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; services convert it into
//! `crate::errors::domain::DomainError` here, and handlers map that to
//! `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Json(_) | sea_orm::DbErr::Type(_) => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Stored data could not be decoded");
            return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is corrupt");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation("Referenced record does not exist");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let mapped = map_db_err(DbErr::RecordNotFound("survey".into()));
        assert!(matches!(mapped, DomainError::NotFound(_, _)));
    }

    #[test]
    fn sqlite_foreign_key_failure_is_validation() {
        let mapped = map_db_err(DbErr::Exec(RuntimeErr::Internal(
            "error returned from database: (code: 787) FOREIGN KEY constraint failed".into(),
        )));
        assert!(matches!(mapped, DomainError::Validation(_)));
    }

    #[test]
    fn postgres_foreign_key_failure_is_validation() {
        let mapped = map_db_err(DbErr::Exec(RuntimeErr::Internal(
            "SQLSTATE(23503) insert or update on table \"answers\" violates foreign key".into(),
        )));
        assert!(matches!(mapped, DomainError::Validation(_)));
    }

    #[test]
    fn json_errors_are_data_corruption() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped = map_db_err(DbErr::Json(json_err.to_string()));
        assert_eq!(
            mapped,
            DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is corrupt")
        );
    }

    #[test]
    fn timeouts_are_timeouts() {
        let mapped = map_db_err(DbErr::Custom("statement timeout exceeded".into()));
        assert!(matches!(mapped, DomainError::Infra(InfraErrorKind::Timeout, _)));
    }

    #[test]
    fn unknown_errors_do_not_leak_detail() {
        let mapped = map_db_err(DbErr::Custom("relation \"secret_table\" does not exist".into()));
        match mapped {
            DomainError::Infra(InfraErrorKind::Other(_), detail) => {
                assert_eq!(detail, "Database operation failed")
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
