pub mod items;
pub mod ml_models;
pub mod root;
pub mod slash;
pub mod users;
pub mod write;

pub use items::{list_items_handler, read_item_handler, read_required_item_handler};
pub use ml_models::model_handler;
pub use root::root_handler;
pub use slash::{add_trailing_slash, strip_trailing_slash};
pub use users::user_item_handler;
pub use write::{create_item_handler, update_item_handler};
