//! Progression: the persisted game state and the store that mutates it.
//!
//! ## Key Types
//!
//! - `GameState`: points, streak, unlocked sets, win/loss totals
//! - `ProgressionStore`: win/loss/reset rules plus the persistence
//!   lifecycle (load once at session start, persist after every
//!   mutation, delete on reset)

pub mod state;
pub mod store;

pub use state::GameState;
pub use store::{ProgressionStore, GAME_DATA_KEY};
