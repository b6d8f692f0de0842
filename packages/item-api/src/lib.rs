//! REST API server for the in-memory item store.
//!
//! Provides HTTP endpoints for item CRUD operations, request routing,
//! and the hyper server loop.

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
