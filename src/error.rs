//! Error types for the Highlight Report server

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::document::DocumentError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Document(DocumentError::UnsupportedFormat(_))
            | AppError::Document(DocumentError::ParseError(_))
            | AppError::Document(DocumentError::ContextError(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Document(_) | AppError::Internal(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (title, message) = match &self {
            AppError::NotFound(msg) => ("Not found", msg.clone()),
            AppError::BadRequest(msg) => ("Bad request", msg.clone()),
            AppError::Document(e) if status == StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::warn!("Unreadable document: {}", e);
                (
                    "Unreadable PDF",
                    "This file could not be opened as a PDF. It may be corrupt, encrypted or not a PDF at all."
                        .to_string(),
                )
            }
            AppError::Document(e) => {
                tracing::error!("Document error: {}", e);
                ("Processing failed", "The document could not be processed.".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal error", "An internal error occurred".to_string())
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                ("Storage error", "The upload could not be stored.".to_string())
            }
        };

        let details = if cfg!(debug_assertions) {
            format!(
                "<pre>{}</pre>",
                html_escape::encode_text(&self.to_string())
            )
        } else {
            String::new()
        };

        let body = format!(
            "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body style=\"font-family: 'Segoe UI', sans-serif; max-width: 600px; margin: 80px auto;\">\n    <h1>{title}</h1>\n    <p>{}</p>\n    {details}\n    <p><a href=\"/\">Upload another file</a></p>\n</body>\n</html>\n",
            html_escape::encode_text(&message)
        );

        (status, Html(body)).into_response()
    }
}
