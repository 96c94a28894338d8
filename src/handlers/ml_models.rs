use crate::error::ErrorResponse;
use crate::extract::ValidPath;
use crate::models::{ModelName, ModelResponse};
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /models/{model_name} handler - Describe a known model architecture
///
/// Only `alexnet`, `resnet` and `lenet` are routable; anything else is a 422.
#[utoipa::path(
    get,
    path = routes::MODEL,
    params(
        ("model_name" = ModelName, Path, description = "Model architecture")
    ),
    responses(
        (status = 200, description = "Model description", body = ModelResponse),
        (status = 422, description = "Unknown model name", body = ErrorResponse)
    ),
    tag = "read"
)]
pub async fn model_handler(
    ValidPath(model_name): ValidPath<ModelName>,
) -> (StatusCode, Json<ModelResponse>) {
    tracing::debug!("Describing model {:?}", model_name);
    (
        StatusCode::OK,
        Json(ModelResponse {
            model_name,
            message: model_name.message().to_string(),
        }),
    )
}
