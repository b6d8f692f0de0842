//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::{body::Bytes, Request};
use serde::Deserialize;
use tokio::time;

use crate::router::RouterError;
use item_store::StoreError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Helper function to read the request body with a timeout
pub async fn read_request_body_with_timeout(
    req: Request<hyper::body::Incoming>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parses the `{id}` path segment into an item id.
pub fn parse_item_id(raw: &str) -> Result<u64, RouterError> {
    raw.parse()
        .map_err(|e| RouterError::BadRequest(format!("Invalid item id '{}': {}", raw, e)))
}

/// Map StoreError to the appropriate RouterError.
///
/// `ItemNotFound` carries the fixed message the API contract promises.
pub fn map_store_error(e: StoreError) -> RouterError {
    match e {
        StoreError::ItemNotFound { .. } => RouterError::NotFound("Item not found".to_string()),
        StoreError::LockPoisoned => RouterError::InternalError(format!("Store error: {}", e)),
    }
}

/// Request to create an item. A body without `name` fails to parse.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Item name
    pub name: String,
}

/// Request to replace an item's name.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    /// Replacement name
    pub name: String,
}
