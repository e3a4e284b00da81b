//! # cardclash
//!
//! Progression and card-comparison core for a trump-card battle game:
//! flip a random card against an opponent's random card, compare one
//! randomly-chosen attribute, and accumulate points and streaks that
//! unlock further card sets.
//!
//! ## Design Principles
//!
//! 1. **Owned state, no globals**: the progression store is a value you
//!    construct with its config and storage backend; its lifecycle
//!    (load at session start, persist on mutate, explicit reset) is
//!    visible in the type.
//!
//! 2. **Presentation stays outside**: rendering, animation, and
//!    navigation consume this crate through a narrow surface - read the
//!    state, start rounds, flip, record outcomes.
//!
//! 3. **Storage failures never reach gameplay**: mutations update
//!    memory synchronously and dispatch detached writes; a failing
//!    backend is logged and the in-memory state stays authoritative.
//!
//! ## Modules
//!
//! - `catalog`: card sets, cards, and the registry that holds them
//! - `core`: configuration, RNG, errors
//! - `battle`: comparator, random draws, the round state machine
//! - `progress`: the persisted game state and the progression store
//! - `storage`: the durable key-value slot and the persist worker

pub mod battle;
pub mod catalog;
pub mod core;
pub mod progress;
pub mod storage;

// Re-export commonly used types
pub use crate::catalog::{Attributes, Card, CardCatalog, CardSet, Rarity, SetId};

pub use crate::core::{GameConfig, GameError, GameRng, StorageError, UnlockRule};

pub use crate::battle::{
    compare, pick_random_attribute, pick_random_card, ComparisonResult, Round, RoundPhase, Winner,
};

pub use crate::progress::{GameState, ProgressionStore, GAME_DATA_KEY};

pub use crate::storage::{FileStorage, MemoryStorage, PersistWorker, StorageBackend};
