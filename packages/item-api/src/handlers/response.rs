//! Response types and helpers for HTTP endpoints.

use hyper::{body::Bytes, Response};
use serde::Serialize;

use crate::router::RouterError;

/// Fixed-message response body, used for delete confirmations and errors.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// Human-readable outcome message
    pub message: String,
}

/// Helper to create a `{"message": ...}` body.
pub fn message_body(message: &str) -> MessageBody {
    MessageBody {
        message: message.to_string(),
    }
}

/// Helper to build an HTTP response with a JSON body.
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Serializes `data` and builds a response in one step.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(data)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(status, json)
}
