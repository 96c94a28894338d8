use crate::error::ErrorResponse;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::models::{Item, ItemResponse, UpdateQuery};
use crate::routes;
use axum::{Json, http::StatusCode};

/// POST /items/ handler - Echo an item, adding the taxed price
///
/// `price_with_tax` is present only when the body carries a non-zero `tax`.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = Item,
    responses(
        (status = 200, description = "Item with derived price", body = ItemResponse),
        (status = 422, description = "Malformed JSON or missing name/price", body = ErrorResponse)
    ),
    tag = "write"
)]
pub async fn create_item_handler(
    ValidJson(item): ValidJson<Item>,
) -> (StatusCode, Json<ItemResponse>) {
    let price_with_tax = item.price_with_tax();

    tracing::info!(
        "Created item '{}' (price: {}, price_with_tax: {:?})",
        item.name,
        item.price,
        price_with_tax
    );

    (
        StatusCode::OK,
        Json(ItemResponse {
            item_id: None,
            item,
            price_with_tax,
            q: None,
        }),
    )
}

/// PUT /items/{item_id} handler - Merge the path id into the item
///
/// `q` is echoed when non-empty.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("item_id" = i64, Path, description = "Item id"),
        ("q" = Option<String>, Query, description = "Optional search text")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "Item merged with its id", body = ItemResponse),
        (status = 422, description = "Non-integer id, malformed JSON or missing name/price", body = ErrorResponse)
    ),
    tag = "write"
)]
pub async fn update_item_handler(
    ValidPath(item_id): ValidPath<i64>,
    ValidQuery(query): ValidQuery<UpdateQuery>,
    ValidJson(item): ValidJson<Item>,
) -> (StatusCode, Json<ItemResponse>) {
    tracing::info!("Updated item {} ('{}')", item_id, item.name);

    (
        StatusCode::OK,
        Json(ItemResponse {
            item_id: Some(item_id),
            item,
            price_with_tax: None,
            q: query.q.filter(|q| !q.is_empty()),
        }),
    )
}
