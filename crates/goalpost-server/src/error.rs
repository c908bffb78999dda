use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Answered with a plain-text reason and no JSON body.
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn goal_not_found() -> Self {
        ApiError::NotFound("That goal does not exist".to_string())
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound("That user does not exist".to_string())
    }

    pub fn category_not_found() -> Self {
        ApiError::NotFound("That category does not exist".to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(reason) => (StatusCode::NOT_FOUND, reason).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<goalpost_storage::error::StorageError> for ApiError {
    fn from(e: goalpost_storage::error::StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
