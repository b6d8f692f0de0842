//! CRUD operation handlers for items.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};

use super::request_utils::{
    map_store_error, parse_item_id, read_request_body_with_timeout, CreateItemRequest,
    MatchitParams, UpdateItemRequest,
};
use super::response::{json_response, message_body};

/// Lists all items.
///
/// # Endpoint
/// `GET /api/items`
///
/// # Response
/// - **200 OK**: JSON array of items in insertion order
/// ```json
/// [
///   {"id": 1, "name": "Item 1"},
///   {"id": 2, "name": "Item 2"}
/// ]
/// ```
///
/// # Example
/// ```bash
/// curl http://localhost:8080/api/items
/// ```
pub async fn list_items(
    _req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let items = state.store.list().map_err(map_store_error)?;
    json_response(200, &items)
}

/// Creates a new item.
///
/// # Endpoint
/// `POST /api/items`
///
/// # Request Body
/// ```json
/// {
///   "name": "Item 3"
/// }
/// ```
///
/// # Response
/// - **201 Created**: Returns the created item with its assigned id
/// ```json
/// {
///   "id": 3,
///   "name": "Item 3"
/// }
/// ```
///
/// # Errors
/// - **400 Bad Request**: Body is not JSON or `name` is missing
///
/// # Notes
/// - Item ids are auto-incremented and never reused
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8080/api/items \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Item 3"}'
/// ```
pub async fn create_item(
    req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;

    let request: CreateItemRequest = serde_json::from_slice(&body_bytes)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;

    let item = state.store.create(request.name).map_err(map_store_error)?;

    json_response(201, &item)
}

/// Reads a single item by id.
///
/// # Endpoint
/// `GET /api/items/{id}`
///
/// # Response
/// - **200 OK**: The item as JSON
///
/// # Errors
/// - **400 Bad Request**: Non-integer id segment
/// - **404 Not Found**: No item with the given id
pub async fn get_item(
    _req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let item_id = parse_item_id(params.get("id").unwrap_or("0"))?;

    let item = state.store.get(item_id).map_err(map_store_error)?;

    json_response(200, &item)
}

/// Replaces an item's name.
///
/// # Endpoint
/// `PUT /api/items/{id}`
///
/// # Request Body
/// ```json
/// {
///   "name": "Updated Item"
/// }
/// ```
///
/// # Response
/// - **200 OK**: Returns the updated item
/// ```json
/// {
///   "id": 1,
///   "name": "Updated Item"
/// }
/// ```
///
/// # Errors
/// - **400 Bad Request**: Non-integer id segment, or body missing `name`
/// - **404 Not Found**: No item with the given id
///
/// # Example
/// ```bash
/// curl -X PUT http://localhost:8080/api/items/1 \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Updated Item"}'
/// ```
pub async fn update_item(
    req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let item_id = parse_item_id(params.get("id").unwrap_or("0"))?;

    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;

    let request: UpdateItemRequest = serde_json::from_slice(&body_bytes)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;

    let item = state
        .store
        .update(item_id, request.name)
        .map_err(map_store_error)?;

    json_response(200, &item)
}

/// Deletes an item.
///
/// # Endpoint
/// `DELETE /api/items/{id}`
///
/// # Response
/// - **200 OK**: `{"message": "Item deleted successfully"}`
///
/// # Errors
/// - **400 Bad Request**: Non-integer id segment
/// - **404 Not Found**: No item with the given id
///
/// # Example
/// ```bash
/// curl -X DELETE http://localhost:8080/api/items/1
/// ```
pub async fn delete_item(
    _req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let item_id = parse_item_id(params.get("id").unwrap_or("0"))?;

    state.store.delete(item_id).map_err(map_store_error)?;

    json_response(200, &message_body("Item deleted successfully"))
}
