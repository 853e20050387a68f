use assessment_sdk::{AssessmentError, CalculatorKind};
use uuid::Uuid;

/// Inline messages of the lead form.
pub const EMPTY_NAME_MESSAGE: &str = "Please enter your name";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("Failed to submit form. Please try again.")]
    SubmissionFailed,

    #[error("lead form is locked while a submission is pending or complete")]
    FormLocked,

    #[error("unknown field '{field}' for calculator '{calculator}'")]
    UnknownField {
        calculator: CalculatorKind,
        field: String,
    },

    #[error("assessment page {0} not found")]
    PageNotFound(Uuid),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unknown_field(calculator: CalculatorKind, field: impl Into<String>) -> Self {
        Self::UnknownField {
            calculator,
            field: field.into(),
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { message, .. } => Self::validation(message),
            DomainError::UnknownField { .. } | DomainError::FormLocked => {
                Self::validation(e.to_string())
            }
            DomainError::SubmissionFailed => Self::SubmissionFailed,
            DomainError::PageNotFound(id) => Self::not_found(format!("assessment page {id}")),
            DomainError::Storage(_) => Self::internal(),
        }
    }
}
