// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const ITEMS: &str = "/items/";
pub const ITEMS_NO_SLASH: &str = "/items";
pub const ITEM: &str = "/items/{item_id}";
pub const MODEL: &str = "/models/{model_name}";
pub const USER_ITEM: &str = "/users/{user_id}/items/{item_id}";
pub const REQUIRED_ITEM: &str = "/items_r/{item_id}";

pub const OPENAPI: &str = "/openapi.json";
pub const DOCS: &str = "/docs";
pub const REDOC: &str = "/redoc";
