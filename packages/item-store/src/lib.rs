//! Core in-memory item store.
//!
//! Provides the item record type, the store container with id allocation,
//! and the store error taxonomy.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{Item, ItemStore};
