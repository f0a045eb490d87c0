use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use devhub_core::error::{CoreError, DuplicateKind};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `devhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a stable code and human-readable message.
    #[error("Bad request: {1}")]
    BadRequest(&'static str, String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    not_found_code(entity),
                    format!("{entity} {id} not found"),
                ),
                CoreError::Validation(kind) => {
                    (StatusCode::BAD_REQUEST, kind.code(), kind.message().to_string())
                }
                CoreError::Duplicate(kind) => {
                    (StatusCode::CONFLICT, kind.code(), kind.message().to_string())
                }
                CoreError::Deserialization(msg) => {
                    tracing::error!(error = %msg, "Corrupt team member payload");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "TEAM_MEMBERS_CORRUPT",
                        "Stored team member data could not be read".to_string(),
                    )
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(code, msg) => (StatusCode::BAD_REQUEST, *code, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Entity-specific not-found codes so callers can tell a missing
/// submission from a missing (not-yet-approved) project.
fn not_found_code(entity: &str) -> &'static str {
    match entity {
        "Submission" => "SUBMISSION_NOT_FOUND",
        "Project" => "PROJECT_NOT_FOUND",
        _ => "NOT_FOUND",
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (error code 23505) on the duplicate-guard
///   constraints map back to the same named duplicate codes the pre-checks
///   produce, so the constraint is the backstop for the check-then-act
///   race without changing the API surface.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let duplicate = match db_err.constraint() {
                    Some("uq_submissions_project_name") => Some(DuplicateKind::Submission),
                    Some("uq_projects_name") => Some(DuplicateKind::ProjectName),
                    _ => None,
                };
                if let Some(kind) = duplicate {
                    return (StatusCode::CONFLICT, kind.code(), kind.message().to_string());
                }
                if let Some(constraint) = db_err.constraint() {
                    if constraint.starts_with("uq_") {
                        return (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            format!("Duplicate value violates unique constraint: {constraint}"),
                        );
                    }
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
