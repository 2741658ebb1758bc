//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every way a stub request can fail and implements
//! Axum's `IntoResponse` so handlers can return `Result<_, AppError>` and get
//! a plain-text error body with the matching status.
//!
//! Error mappings:
//! - `MalformedPath` → 400
//! - `FileNotFound` → 404
//! - `ParseFailure` → 422
//! - `UnsupportedDialect` → 501
//! - `Upstream` → 502
//! - `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::Dialect;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid path. Expects /<author>/<repository>/<branch>/path/to/file...")]
    MalformedPath,

    #[error("File not found.")]
    FileNotFound,

    #[error("Parse error in {source_id} at {line}:{column}: {message}")]
    ParseFailure {
        source_id: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("No projector registered for {0} sources")]
    UnsupportedDialect(Dialect),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPath => StatusCode::BAD_REQUEST,
            AppError::FileNotFound => StatusCode::NOT_FOUND,
            AppError::ParseFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnsupportedDialect(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
