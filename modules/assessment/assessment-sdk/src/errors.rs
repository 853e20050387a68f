//! Error types for the assessment SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Lead form rejected before anything was sent; `message` is the inline text.
    #[error("{message}")]
    Validation { message: String },

    /// Webhook delivery failed (transport error or non-2xx status).
    #[error("Failed to submit form. Please try again.")]
    SubmissionFailed,

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Internal error")]
    Internal,
}

impl AssessmentError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
