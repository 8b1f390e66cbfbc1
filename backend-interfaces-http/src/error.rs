use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use backend_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    /// Map an application error onto the wire taxonomy. Internal failures
    /// keep their detail in the log and surface only the generic message.
    pub fn from_app(err: AppError, internal_message: &str) -> Self {
        match err {
            AppError::BadRequest(message) => HttpError::BadRequest(message),
            AppError::NotFound(message) => HttpError::NotFound(message),
            AppError::Internal(source) => {
                error!("{}: {:#}", internal_message, source);
                HttpError::Internal(internal_message.to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            HttpError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            HttpError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
