//! Transport errors and their JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ginmania_core::SearchError;

/// Error message attached to responses for failed searches so the access
/// log can report it without re-reading the body. Parameter rejections never
/// reach the service and carry no message; they log as completed requests.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query parameter could not be parsed.
    #[error("{0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Search(SearchError::InvalidPagination) => StatusCode::BAD_REQUEST,
            ApiError::Search(SearchError::NotConfigured | SearchError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let mut response = (
            self.status(),
            Json(serde_json::json!({ "error": message })),
        )
            .into_response();
        if let ApiError::Search(_) = self {
            response.extensions_mut().insert(ErrorMessage(message));
        }
        response
    }
}
