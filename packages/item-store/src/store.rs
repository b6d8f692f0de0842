//! Item collection and id allocation.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A single stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned unique identifier
    pub id: u64,
    /// Caller-supplied name, mutable via update
    pub name: String,
}

/// Collection state guarded by the store lock.
#[derive(Debug)]
struct StoreInner {
    /// Items in insertion order
    items: Vec<Item>,
    /// Next id to assign; incremented on every create, never reused
    next_id: u64,
}

/// In-memory store owning the item collection and the id counter.
///
/// All operations go through a single `RwLock`, so mutations are serialized
/// against each other and against reads. The id counter lives under the same
/// lock and is independent of the collection size, so ids stay unique for
/// the lifetime of the process even after deletions.
#[derive(Debug)]
pub struct ItemStore {
    inner: RwLock<StoreInner>,
}

impl ItemStore {
    /// Creates a new empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns a snapshot of all items in insertion order.
    pub fn list(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.items.clone())
    }

    /// Returns the item with the matching id.
    ///
    /// # Errors
    /// `StoreError::ItemNotFound` if no item has the given id.
    pub fn get(&self, id: u64) -> Result<Item, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        inner
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::ItemNotFound { id })
    }

    /// Allocates a new id, appends the item, and returns it.
    pub fn create(&self, name: String) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = inner.next_id;
        inner.next_id += 1;
        let item = Item { id, name };
        inner.items.push(item.clone());
        tracing::debug!("created item {}", id);
        Ok(item)
    }

    /// Replaces the name of the matching item and returns the updated item.
    ///
    /// # Errors
    /// `StoreError::ItemNotFound` if no item has the given id; the
    /// collection is left unchanged.
    pub fn update(&self, id: u64, name: String) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound { id })?;
        item.name = name;
        Ok(item.clone())
    }

    /// Removes the matching item from the collection.
    ///
    /// # Errors
    /// `StoreError::ItemNotFound` if no item has the given id; the
    /// collection is left unchanged.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let index = inner
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound { id })?;
        inner.items.remove(index);
        tracing::debug!("deleted item {}", id);
        Ok(())
    }

    /// Returns the number of items currently stored.
    pub fn item_count(&self) -> usize {
        self.inner.read().map(|inner| inner.items.len()).unwrap_or(0)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
