use crate::error::ErrorResponse;
use crate::extract::{ValidPath, ValidQuery};
use crate::models::{ItemQuery, ItemView};
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /users/{user_id}/items/{item_id} handler - Item owned by a user
#[utoipa::path(
    get,
    path = routes::USER_ITEM,
    params(
        ("user_id" = i64, Path, description = "Owner id"),
        ("item_id" = String, Path, description = "Item identifier"),
        ("q" = Option<String>, Query, description = "Optional search text"),
        ("short" = Option<bool>, Query, description = "Omit the long description")
    ),
    responses(
        (status = 200, description = "Item view with owner", body = ItemView),
        (status = 422, description = "user_id is not an integer or short is not a boolean", body = ErrorResponse)
    ),
    tag = "read"
)]
pub async fn user_item_handler(
    ValidPath((user_id, item_id)): ValidPath<(i64, String)>,
    ValidQuery(query): ValidQuery<ItemQuery>,
) -> (StatusCode, Json<ItemView>) {
    tracing::debug!("Reading item {} for user {}", item_id, user_id);
    (
        StatusCode::OK,
        Json(ItemView::new(item_id, Some(user_id), &query)),
    )
}

#[cfg(test)]
mod tests {
    use crate::app::read_router;
    use crate::handlers::test_support::get;
    use crate::models::LONG_DESCRIPTION;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_user_item_full() {
        let (status, body) = get(read_router(), "/users/7/items/foo?q=bar").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "item_id": "foo",
                "owner_id": 7,
                "q": "bar",
                "description": LONG_DESCRIPTION
            })
        );
    }

    #[tokio::test]
    async fn test_user_item_short() {
        let (status, body) = get(read_router(), "/users/7/items/foo?short=yes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"item_id": "foo", "owner_id": 7}));
    }

    #[tokio::test]
    async fn test_user_id_must_be_integer() {
        let (status, body) = get(read_router(), "/users/alice/items/foo").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("Invalid path parameter"));
    }
}
