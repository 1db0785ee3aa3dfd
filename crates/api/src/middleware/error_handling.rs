//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so
//! every endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shiftboard_core::errors::ShiftError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain [`ShiftError`] instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ShiftError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ShiftError::NotFound(_) => StatusCode::NOT_FOUND,
            ShiftError::Validation(_) => StatusCode::BAD_REQUEST,
            ShiftError::Conflict(_) => StatusCode::CONFLICT,
            ShiftError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShiftError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, ShiftError>` inside
/// handlers returning `Result<T, AppError>`.
impl From<ShiftError> for AppError {
    fn from(err: ShiftError) -> Self {
        AppError(err)
    }
}

/// Wraps stray `eyre::Report`s as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ShiftError::Database(err))
    }
}
