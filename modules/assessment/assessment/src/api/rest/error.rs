use assessment_sdk::UnknownCalculator;
use axum::http::{StatusCode, Uri};

use super::problem::Problem;
use crate::domain::error::DomainError;

const ERROR_TYPE_BASE: &str = "https://errors.setitgo.com";

fn finish(problem: Problem, code: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let mut problem = problem
        .with_type(format!("{ERROR_TYPE_BASE}/{code}"))
        .with_code(code);
    if let Some(id) = trace_id {
        problem = problem.with_trace_id(id);
    }
    problem
}

/// Converts a handler error into a `Problem` for the request at `uri`.
pub fn problem_at(e: impl Into<Problem>, uri: &Uri) -> Problem {
    e.into().with_instance(uri.path())
}

/// Rejected request input (malformed body or path segment).
pub(super) fn validation_problem(status: StatusCode, detail: String) -> Problem {
    let title = status.canonical_reason().unwrap_or("Bad Request");
    finish(Problem::new(status, title, detail), "ASSESSMENT_VALIDATION")
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::Validation { field, message } => finish(
                Problem::new(StatusCode::BAD_REQUEST, "Bad Request", message.clone())
                    .with_field(*field),
                "ASSESSMENT_VALIDATION",
            ),
            DomainError::UnknownField { field, .. } => finish(
                Problem::new(StatusCode::BAD_REQUEST, "Bad Request", e.to_string())
                    .with_field(field.clone()),
                "ASSESSMENT_VALIDATION",
            ),
            DomainError::FormLocked => finish(
                Problem::new(StatusCode::CONFLICT, "Conflict", e.to_string()),
                "ASSESSMENT_VALIDATION",
            ),
            DomainError::SubmissionFailed => finish(
                Problem::new(StatusCode::BAD_GATEWAY, "Bad Gateway", e.to_string()),
                "ASSESSMENT_SUBMISSION_FAILED",
            ),
            DomainError::PageNotFound(_) => finish(
                Problem::new(StatusCode::NOT_FOUND, "Not Found", e.to_string()),
                "ASSESSMENT_NOT_FOUND",
            ),
            DomainError::Storage(_) => {
                tracing::error!(error = ?e, "client storage error");
                finish(
                    Problem::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error",
                        "An internal error occurred",
                    ),
                    "ASSESSMENT_INTERNAL",
                )
            }
        }
    }
}

impl From<UnknownCalculator> for Problem {
    fn from(e: UnknownCalculator) -> Self {
        finish(
            Problem::new(StatusCode::NOT_FOUND, "Not Found", e.to_string()),
            "ASSESSMENT_NOT_FOUND",
        )
    }
}
