//! Crate-level error types.
//!
//! Two tiers: `StorageError` covers the durable key-value slot and is
//! recovered locally (logged, operation becomes a no-op), while
//! `GameError` is the signaled-condition surface of the core. Nothing in
//! the core panics across the public boundary on a failure path.

use crate::catalog::SetId;

/// Errors from the durable key-value storage layer.
///
/// These never escape a mutation: persistence failures are logged and
/// swallowed, and the in-memory state stays authoritative for the
/// session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors signaled by the game core.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A set identifier was requested that the catalog doesn't know.
    /// The core does not guess a fallback set.
    #[error("unknown card set: {0}")]
    UnknownSet(SetId),

    /// Card set data from an external file failed to parse.
    #[error("malformed card set data: {0}")]
    MalformedSetData(String),

    /// An attribute was requested that a card doesn't carry.
    #[error("card {card:?} has no attribute {attribute:?}")]
    MissingAttribute { card: String, attribute: String },

    /// The combined pool of unlocked sets held no cards at round start.
    #[error("no cards available in unlocked sets")]
    NoCardsAvailable,

    /// `flip` was invoked outside the `Ready` phase.
    #[error("round is not ready to flip")]
    RoundNotReady,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
