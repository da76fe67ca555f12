use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::session::GateReason;

/// Application-level error type.
/// Implements `IntoResponse` so axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Profile validation failures, collected and returned together.
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    /// A page precondition is unmet; carries a machine-readable reason code
    /// so the caller can redirect deterministically.
    #[error("Precondition failed: {0:?}")]
    Gate(GateReason),

    #[error("Unknown session")]
    SessionNotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Please fix the following issues before continuing.",
                        "errors": errors,
                    }
                }),
            ),
            AppError::Gate(reason) => (
                StatusCode::CONFLICT,
                json!({
                    "error": {
                        "code": "PRECONDITION_FAILED",
                        "reason": reason,
                        "message": reason.message(),
                    }
                }),
            ),
            AppError::SessionNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": {
                        "code": "SESSION_NOT_FOUND",
                        "message": "Unknown or expired session id",
                    }
                }),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "code": "BAD_REQUEST",
                        "message": msg,
                    }
                }),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": {
                            "code": "LLM_ERROR",
                            "message": "The generation service failed",
                        }
                    }),
                )
            }
            AppError::Document(msg) => {
                tracing::error!("Document error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "DOCUMENT_ERROR",
                            "message": "Resume document generation failed",
                        }
                    }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "INTERNAL_ERROR",
                            "message": "An internal server error occurred",
                        }
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
