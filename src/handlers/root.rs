use crate::models::Greeting;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET / handler - Fixed greeting
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting", body = Greeting)
    ),
    tag = "read"
)]
pub async fn root_handler() -> (StatusCode, Json<Greeting>) {
    (
        StatusCode::OK,
        Json(Greeting {
            message: "Hello World".to_string(),
        }),
    )
}
