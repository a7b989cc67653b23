//! Error handling for the Oyster Status API
//!
//! Every failure is request scoped: it becomes an HTTP status with a
//! plain-text body and the process keeps serving.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A single-row lookup matched nothing
    #[error("{0} not found")]
    NotFound(String),

    /// The database rejected or could not execute a statement
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// A row could not be decoded into the expected shape
    #[error("row decode error: {0}")]
    Decode(String),

    /// The caller supplied timeout elapsed before the query finished
    #[error("query deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("row".to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => AppError::Decode(err.to_string()),
            other => AppError::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "Request rejected: {}", message);
        }

        (status, message).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
