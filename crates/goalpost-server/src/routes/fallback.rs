use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Terminal response for anything no route matched.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Cannot {method} {}", uri.path()))
}
