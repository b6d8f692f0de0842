//! Store error types.

use thiserror::Error;

/// Item store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the requested id
    #[error("Item {id} not found")]
    ItemNotFound { id: u64 },

    /// Lock poisoned (a writer panicked while holding the store lock)
    #[error("Lock poisoned")]
    LockPoisoned,
}
