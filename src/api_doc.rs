use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{FakeItem, Greeting, Item, ItemResponse, ItemView, ModelName, ModelResponse, RequiredItem};

/// OpenAPI documentation for the read service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "first-steps read API",
        version = "1.0.0",
        description = "Path, query and enumerated parameters over a fixed item list"
    ),
    paths(
        handlers::root::root_handler,
        handlers::items::list_items_handler,
        handlers::items::read_item_handler,
        handlers::items::read_required_item_handler,
        handlers::ml_models::model_handler,
        handlers::users::user_item_handler
    ),
    components(
        schemas(
            Greeting,
            FakeItem,
            ItemView,
            RequiredItem,
            ModelName,
            ModelResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "read", description = "Parameter parsing demos")
    )
)]
pub struct ReadApiDoc;

/// OpenAPI documentation for the write service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "first-steps write API",
        version = "1.0.0",
        description = "Request body parsing with derived fields"
    ),
    paths(
        handlers::write::create_item_handler,
        handlers::write::update_item_handler
    ),
    components(
        schemas(
            Item,
            ItemResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "write", description = "Request body demos")
    )
)]
pub struct WriteApiDoc;
