use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use egot_core::error::CoreError;
use egot_resolver::ResolveError;
use serde_json::json;

/// Error returned by every handler.
///
/// Rendered as `{ "error": message, "code": CODE }`. Internal details never
/// reach the body; they are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

type ErrorParts = (StatusCode, &'static str, String);

impl AppError {
    fn parts(&self) -> ErrorParts {
        match self {
            AppError::Core(err) => core_parts(err),
            AppError::Resolve(err) => resolve_parts(err),
            AppError::Database(err) => sqlx_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

fn core_parts(err: &CoreError) -> ErrorParts {
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}

/// Upstream failures and deadlines look exactly like an unknown name to the
/// client. Only the log tells them apart.
fn resolve_parts(err: &ResolveError) -> ErrorParts {
    match err {
        ResolveError::NotFound(_) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", capitalize(&err.to_string()))
        }
        ResolveError::Upstream(_) | ResolveError::DeadlineExceeded { .. } => {
            tracing::warn!(error = %err, "Celebrity lookup failed upstream");
            (StatusCode::NOT_FOUND, "NOT_FOUND", "Celebrity not found".to_string())
        }
        ResolveError::Persistence(db) => sqlx_parts(db),
    }
}

/// `RowNotFound` is a 404 and a `uq_*` unique violation (SQLSTATE 23505) is
/// a 409. Anything else is logged and sanitized to a 500.
fn sqlx_parts(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_")) =>
        {
            let constraint = db_err.constraint().unwrap_or_default();
            (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
