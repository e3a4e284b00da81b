//! Core types: configuration, RNG, errors.
//!
//! The building blocks the rest of the crate sits on. Progression rules
//! live in `GameConfig` rather than module-level constants so stores can
//! be constructed with custom rules in tests.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, UnlockRule};
pub use error::{GameError, StorageError};
pub use rng::GameRng;
