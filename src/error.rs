//! # Error Handling
//!
//! Error taxonomy for dataset generation. Every failure carries a stable
//! SCREAMING_SNAKE_CASE code so callers (and the CLI's JSON output) can react
//! programmatically.

use sea_orm::{DbErr, RuntimeErr};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::seeds::weights::WeightTableError;

/// Errors raised by [`crate::seeds::EmployeeDataGenerator`].
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A request parameter is out of range. Raised before any storage access.
    #[error("invalid parameter `{parameter}`: {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    /// A step had no eligible parent entities to reference.
    #[error("precondition violated during {step}: {message}")]
    PreconditionViolation { step: &'static str, message: String },

    /// The underlying store rejected an operation; the transaction was rolled back.
    #[error("storage failure: {0}")]
    StorageFailure(#[from] DbErr),

    /// A weighted table in the generator configuration is unusable.
    #[error("invalid generator configuration: {0}")]
    Configuration(#[from] WeightTableError),

    /// The generator configuration failed validation.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl GenerationError {
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    pub fn precondition(step: &'static str, message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            step,
            message: message.into(),
        }
    }

    /// Machine readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::InvalidParameter { .. } => "INVALID_PARAMETER",
            GenerationError::PreconditionViolation { .. } => "PRECONDITION_VIOLATION",
            GenerationError::StorageFailure(err) if is_unique_violation(err) => "CONFLICT",
            GenerationError::StorageFailure(_) => "STORAGE_FAILURE",
            GenerationError::Configuration(_) | GenerationError::InvalidConfig(_) => {
                "INVALID_CONFIGURATION"
            }
        }
    }

    /// Serializable summary used by the command line output.
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// JSON shape of a failed run.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

/// Detects unique-constraint violations across the supported backends.
pub fn is_unique_violation(error: &DbErr) -> bool {
    const PG_UNIQUE: &str = "23505";
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    let runtime_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    db_error.code().is_some_and(|code| {
        let code: &str = &code;
        code == PG_UNIQUE || SQLITE_DUPLICATE_CODES.contains(&code)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            GenerationError::invalid_parameter("employee_count", "must be positive").code(),
            "INVALID_PARAMETER"
        );
        assert_eq!(
            GenerationError::precondition("employees", "no departments").code(),
            "PRECONDITION_VIOLATION"
        );
        assert_eq!(
            GenerationError::from(DbErr::Custom("boom".to_string())).code(),
            "STORAGE_FAILURE"
        );
    }

    #[test]
    fn report_carries_message() {
        let report = GenerationError::invalid_parameter("attendance_days", "must be at most 366")
            .to_report();
        assert_eq!(report.code, "INVALID_PARAMETER");
        assert_eq!(
            report.message,
            "invalid parameter `attendance_days`: must be at most 366"
        );
    }

    #[test]
    fn non_sqlx_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&DbErr::RecordNotFound("x".into())));
    }
}
