//! Storage backend contract.
//!
//! The durable side of the game is a single key-value slot; the backend
//! trait keeps the store independent of where that slot lives (a file on
//! disk in production, a map in tests).

use crate::core::StorageError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A durable key-value slot.
///
/// Implementations must be safe to share with the background persist
/// worker, hence `Send + Sync`.
pub trait StorageBackend: Send + Sync {
    /// Write the value under a key, replacing any previous value.
    fn save(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Read the value under a key; `None` if absent.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Delete the value under a key. Deleting an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<()>;
}
