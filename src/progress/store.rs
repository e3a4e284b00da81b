//! The progression store: rules plus persistence lifecycle.
//!
//! An owned object, not a global: construct one at session start with
//! the config and storage backend it should run on, `load()` once, then
//! record outcomes. Every mutation updates the in-memory state
//! synchronously and dispatches a detached write of the full snapshot;
//! storage failures are logged and swallowed, so the in-memory state is
//! the source of truth for the session either way.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::SetId;
use crate::core::GameConfig;
use crate::storage::{PersistWorker, StorageBackend};

use super::state::GameState;

/// Fixed key of the durable game-state record.
pub const GAME_DATA_KEY: &str = "game_data";

/// Progression state plus the rules that mutate it.
pub struct ProgressionStore {
    state: GameState,
    config: GameConfig,
    backend: Arc<dyn StorageBackend>,
    worker: PersistWorker,
}

impl ProgressionStore {
    /// Create a store with fresh default state.
    ///
    /// Call `load()` afterwards to adopt a previous session's record.
    #[must_use]
    pub fn new(config: GameConfig, backend: Arc<dyn StorageBackend>) -> Self {
        let state = GameState::new(&config);
        let worker = PersistWorker::spawn(GAME_DATA_KEY, backend.clone());
        Self {
            state,
            config,
            backend,
            worker,
        }
    }

    /// The current progression state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rules this store runs on.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Record a win: award points, extend the streak, evaluate unlocks,
    /// persist.
    ///
    /// Returns the last newly-unlocked set id, if this win crossed any
    /// thresholds. A single huge jump can cross several; all are
    /// applied, and a caller that must announce each one diffs
    /// `state().unlocked_sets()` around the call.
    pub fn record_win(&mut self) -> Option<SetId> {
        let unlocked = self.state.apply_win(&self.config);
        if let Some(set) = &unlocked {
            info!("card set {set} unlocked at {} points", self.state.points());
        }
        self.persist();
        unlocked
    }

    /// Record a loss: apply the streak-break penalty if a streak was
    /// live, reset the streak, persist. No unlock check - points can
    /// only drop on a loss.
    pub fn record_loss(&mut self) {
        self.state.apply_loss(&self.config);
        self.persist();
    }

    /// Re-evaluate the unlock schedule against the current points.
    ///
    /// `record_win` already runs this (and persists afterwards); on its
    /// own it mutates without persisting. Returns the last
    /// newly-unlocked set id.
    pub fn evaluate_unlocks(&mut self) -> Option<SetId> {
        self.state.evaluate_unlocks(&self.config.unlock_schedule)
    }

    /// Dispatch a detached write of the full state snapshot.
    ///
    /// Failures (including serialization) are logged and swallowed.
    pub fn persist(&self) {
        match serde_json::to_vec(&self.state) {
            Ok(bytes) => self.worker.write(bytes),
            Err(e) => warn!("failed to serialize game state: {e}"),
        }
    }

    /// Load the durable record, replacing the in-memory state wholesale.
    ///
    /// An absent, unreadable, or malformed record leaves the current
    /// state untouched - a corrupted record is never partially adopted.
    pub fn load(&mut self) {
        match self.backend.load(GAME_DATA_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<GameState>(&bytes) {
                Ok(state) => {
                    debug!(
                        "loaded saved game: {} points, {} sets unlocked",
                        state.points(),
                        state.unlocked_sets().len()
                    );
                    self.state = state;
                }
                Err(e) => warn!("malformed saved game state, keeping defaults: {e}"),
            },
            Ok(None) => debug!("no saved game state"),
            Err(e) => warn!("failed to read saved game state: {e}"),
        }
    }

    /// Restore defaults and delete the durable record.
    ///
    /// Blocks until the delete has been applied, so a reload right
    /// after a reset sees a clean slate. Per-mutation saves are the
    /// only fire-and-forget writes.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.worker.delete();
        self.worker.flush();
        info!("game progress reset");
    }

    /// Block until every pending write has been applied.
    ///
    /// Shutdown and test hook; gameplay never needs it.
    pub fn flush(&self) {
        self.worker.flush();
    }
}
