use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shortcut_core::ShortenerError;

pub type Result<T> = std::result::Result<T, AppError>;

/// HTTP-facing error wrapper around the service error taxonomy.
#[derive(Debug)]
pub enum AppError {
    Shortener(ShortenerError),
    NotFound(String),
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        Self::Shortener(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Shortener(err) => {
                let status = match &err {
                    ShortenerError::InvalidUrl(_) | ShortenerError::InvalidId(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    ShortenerError::CodeConflict(_) => StatusCode::CONFLICT,
                    ShortenerError::CapacityExhausted { .. } | ShortenerError::Storage(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
