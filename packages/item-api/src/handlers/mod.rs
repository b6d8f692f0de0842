//! HTTP endpoint implementations for item CRUD.

pub mod item_handlers;
pub mod request_utils;
pub mod response;

pub use item_handlers::{create_item, delete_item, get_item, list_items, update_item};
pub use response::message_body;
