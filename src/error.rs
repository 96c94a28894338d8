use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validation failure raised while extracting a request
///
/// Every variant names the part of the request that failed to coerce into its
/// declared type. All of them render as `422 Unprocessable Entity`; handlers
/// never see a request that produced one of these.
#[derive(Debug)]
pub enum ApiError {
    /// A path segment could not be parsed into its declared type
    InvalidPathParam(String),
    /// A query parameter was missing or could not be parsed
    InvalidQueryParam(String),
    /// The request body was not valid JSON for the declared record
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_message = match self {
            ApiError::InvalidPathParam(msg) => format!("Invalid path parameter: {}", msg),
            ApiError::InvalidQueryParam(msg) => format!("Invalid query parameter: {}", msg),
            ApiError::InvalidBody(msg) => format!("Invalid request body: {}", msg),
        };

        tracing::debug!("Rejecting request: {}", error_message);

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPathParam(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQueryParam(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
