//! Error types for the bookshelf server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Shelf id is not of the form `<letter>-<letter>`
    #[error("Invalid id ({0})")]
    InvalidShelfId(&'static str),

    #[error("Shelf not found: {0}")]
    ShelfNotFound(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Request body could not be decoded as a book
    #[error("{0}")]
    MalformedBody(String),

    #[error("ISBN doesn't equal path param ({path} != {body})")]
    IsbnMismatch { path: String, body: String },

    #[error("ISBN already present on shelf: {0}")]
    DuplicateIsbn(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidShelfId(_)
            | AppError::ShelfNotFound(_)
            | AppError::BookNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedBody(_) | AppError::IsbnMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateIsbn(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), "Request failed: {}", self);

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
