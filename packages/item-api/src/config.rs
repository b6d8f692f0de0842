//! API configuration.

/// HTTP API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000, // 5 seconds default
        }
    }
}
