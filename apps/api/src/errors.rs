use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::compile::{suggestions_for, CompileError};
use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No Experience section found in the LaTeX document")]
    SectionNotFound,

    #[error("LaTeX compilation failed: {message}")]
    Compilation {
        message: String,
        log: Option<String>,
    },

    #[error("LaTeX compilation timed out after {0} seconds")]
    CompilationTimeout(u64),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::SectionNotFound => AppError::SectionNotFound,
        }
    }
}

impl From<CompileError> for AppError {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::Timeout(secs) => AppError::CompilationTimeout(secs),
            CompileError::Failed { message, log } => AppError::Compilation { message, log },
            CompileError::Io(e) => AppError::Internal(e.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::SectionNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "SECTION_NOT_FOUND",
                self.to_string(),
            ),
            AppError::Compilation { message, .. } => {
                tracing::warn!("Compilation error: {message}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "COMPILATION_FAILED",
                    self.to_string(),
                )
            }
            AppError::CompilationTimeout(_) => {
                tracing::warn!("{self}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "COMPILATION_TIMEOUT",
                    self.to_string(),
                )
            }
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    self.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });

        // Compilation failures carry the compiler log and remediation hints.
        match &self {
            AppError::Compilation { message, log } => {
                error["suggestions"] = json!(suggestions_for(message));
                if let Some(log) = log {
                    error["log"] = json!(log);
                }
            }
            AppError::CompilationTimeout(_) => {
                error["suggestions"] = json!(suggestions_for(&message));
            }
            _ => {}
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
