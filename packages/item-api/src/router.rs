//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, Method, Request, Response};
use matchit::Router as MatchitRouter;

use crate::config::ApiConfig;
use crate::handlers;
use item_store::ItemStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Item store instance
    pub store: Arc<ItemStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the item CRUD routes.
    pub fn new(store: Arc<ItemStore>, config: Arc<ApiConfig>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/api/items", RouteHandler::Collection)
            .expect("Failed to insert /api/items route");
        router
            .insert("/api/items/{id}", RouteHandler::Item)
            .expect("Failed to insert /api/items/{id} route");

        Self {
            inner: router,
            state: AppState { store, config },
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// Handler failures are rendered as JSON error responses, so every
    /// request resolves to a response.
    pub async fn route(&self, req: Request<hyper::body::Incoming>) -> Response<Bytes> {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => {
                let handler = matched.value;
                match handler
                    .handle(req, matched.params, self.state.clone())
                    .await
                {
                    Ok(response) => response,
                    Err(err) => err.into(),
                }
            }
            Err(_) => RouterError::NotFound(format!("No route found for {}", path)).into(),
        }
    }
}

/// Route handler selected by path match.
enum RouteHandler {
    /// `/api/items`
    Collection,
    /// `/api/items/{id}`
    Item,
}

impl RouteHandler {
    /// Dispatches a request to the handler for its method.
    async fn handle(
        &self,
        req: Request<hyper::body::Incoming>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        match self {
            RouteHandler::Collection => {
                if req.method() == Method::GET {
                    handlers::list_items(req, params, state).await
                } else if req.method() == Method::POST {
                    handlers::create_item(req, params, state).await
                } else {
                    Err(RouterError::MethodNotAllowed)
                }
            }
            RouteHandler::Item => {
                if req.method() == Method::GET {
                    handlers::get_item(req, params, state).await
                } else if req.method() == Method::PUT {
                    handlers::update_item(req, params, state).await
                } else if req.method() == Method::DELETE {
                    handlers::delete_item(req, params, state).await
                } else {
                    Err(RouterError::MethodNotAllowed)
                }
            }
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    Timeout,
    BadRequest(String),
    NotFound(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let (status, message) = match err {
            RouterError::MethodNotAllowed => (405, "Method Not Allowed".to_string()),
            RouterError::InternalError(msg) => (500, msg),
            RouterError::Timeout => (408, "Request Timeout".to_string()),
            RouterError::BadRequest(msg) => (400, msg),
            RouterError::NotFound(msg) => (404, msg),
        };

        let body = serde_json::to_vec(&handlers::message_body(&message))
            .unwrap_or_else(|_| br#"{"message":"Internal Server Error"}"#.to_vec());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(500)
                    .body(Bytes::from_static(b"Internal Server Error"))
                    .expect("Failed to build fallback error response")
            })
    }
}
