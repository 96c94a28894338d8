use crate::error::ErrorResponse;
use crate::extract::{ValidPath, ValidQuery};
use crate::fake_db;
use crate::models::{FakeItem, ItemQuery, ItemView, Pagination, RequiredItem, RequiredQuery};
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /items/ handler - Slice of the fake item list
///
/// Query parameters:
/// - skip: Index of the first item (optional, default: 0)
/// - limit: Number of items to return (optional, default: 10)
///
/// Negative values count from the end of the list. Bounds are never rejected;
/// a window outside the list is simply empty.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    params(
        ("skip" = Option<i64>, Query, description = "Index of the first item"),
        ("limit" = Option<i64>, Query, description = "Number of items to return")
    ),
    responses(
        (status = 200, description = "Slice of the fake item list", body = [FakeItem]),
        (status = 422, description = "skip or limit is not an integer", body = ErrorResponse)
    ),
    tag = "read"
)]
pub async fn list_items_handler(
    ValidQuery(pagination): ValidQuery<Pagination>,
) -> (StatusCode, Json<Vec<FakeItem>>) {
    let items = fake_db::page(pagination.skip, pagination.limit);

    tracing::info!(
        "Listed {} fake items (skip: {}, limit: {})",
        items.len(),
        pagination.skip,
        pagination.limit
    );

    (StatusCode::OK, Json(items))
}

/// GET /items/{item_id} handler - Echo an item id
///
/// `q` is echoed when non-empty. The long description is included unless
/// `short` is set; `short` accepts `1`, `yes`, `on`, `true` and their negations.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("item_id" = String, Path, description = "Item identifier"),
        ("q" = Option<String>, Query, description = "Optional search text"),
        ("short" = Option<bool>, Query, description = "Omit the long description")
    ),
    responses(
        (status = 200, description = "Item view", body = ItemView),
        (status = 422, description = "short is not a boolean", body = ErrorResponse)
    ),
    tag = "read"
)]
pub async fn read_item_handler(
    ValidPath(item_id): ValidPath<String>,
    ValidQuery(query): ValidQuery<ItemQuery>,
) -> (StatusCode, Json<ItemView>) {
    tracing::debug!("Reading item {} (short: {})", item_id, query.short);
    (StatusCode::OK, Json(ItemView::new(item_id, None, &query)))
}

/// GET /items_r/{item_id} handler - Item with a required query parameter
#[utoipa::path(
    get,
    path = routes::REQUIRED_ITEM,
    params(
        ("item_id" = String, Path, description = "Item identifier"),
        ("needy" = String, Query, description = "Required value echoed back")
    ),
    responses(
        (status = 200, description = "Item with the required value", body = RequiredItem),
        (status = 422, description = "needy is missing", body = ErrorResponse)
    ),
    tag = "read"
)]
pub async fn read_required_item_handler(
    ValidPath(item_id): ValidPath<String>,
    ValidQuery(query): ValidQuery<RequiredQuery>,
) -> (StatusCode, Json<RequiredItem>) {
    tracing::debug!("Reading item {} with needy={}", item_id, query.needy);
    (
        StatusCode::OK,
        Json(RequiredItem {
            item_id,
            needy: query.needy,
        }),
    )
}
