//! The persisted progression aggregate.
//!
//! ## Invariants
//!
//! - `points` never goes below 0 (a streak-break penalty is floored)
//! - `unlocked_sets` always contains the configured initial sets and
//!   never shrinks
//! - `streak` is 0 immediately after any recorded loss and grows by
//!   exactly 1 per consecutive recorded win
//! - `total_wins` / `total_losses` only ever grow
//!
//! Fields are private; mutation happens through the win/loss/reset rules
//! so the invariants hold by construction. The serde shape is the wire
//! format of the durable record:
//! `{points, streak, unlockedSets, totalWins, totalLosses}`.

use serde::{Deserialize, Serialize};

use crate::catalog::SetId;
use crate::core::{GameConfig, UnlockRule};

/// Progression state: points, streak, unlocked sets, win/loss totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    points: u64,
    streak: u32,
    unlocked_sets: Vec<SetId>,
    total_wins: u64,
    total_losses: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    /// Create a fresh state with the config's initial sets unlocked.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            points: 0,
            streak: 0,
            unlocked_sets: config.initial_sets.clone(),
            total_wins: 0,
            total_losses: 0,
        }
    }

    /// Current points.
    #[must_use]
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Consecutive wins since the last recorded loss.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Unlocked set identifiers, in unlock order.
    #[must_use]
    pub fn unlocked_sets(&self) -> &[SetId] {
        &self.unlocked_sets
    }

    /// Check whether a set is unlocked.
    #[must_use]
    pub fn is_unlocked(&self, id: &SetId) -> bool {
        self.unlocked_sets.contains(id)
    }

    /// Total recorded wins.
    #[must_use]
    pub fn total_wins(&self) -> u64 {
        self.total_wins
    }

    /// Total recorded losses.
    #[must_use]
    pub fn total_losses(&self) -> u64 {
        self.total_losses
    }

    /// Win percentage over all recorded games, 0 when none were played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let games = self.total_wins + self.total_losses;
        if games == 0 {
            return 0.0;
        }
        self.total_wins as f64 / games as f64 * 100.0
    }

    // === Mutation rules ===
    //
    // Called by the progression store, which persists after each one.

    /// Apply a win: award points, extend the streak, bump the total,
    /// then evaluate the unlock schedule against the new points.
    ///
    /// Returns the last newly-unlocked set, if any.
    pub(crate) fn apply_win(&mut self, config: &GameConfig) -> Option<SetId> {
        self.points += config.points_per_win;
        self.streak += 1;
        self.total_wins += 1;
        self.evaluate_unlocks(&config.unlock_schedule)
    }

    /// Apply a loss: the penalty applies only when a positive streak
    /// breaks, floored at 0; the streak always resets.
    ///
    /// A loss while the streak is already 0 costs nothing - this
    /// asymmetry is the shipped rule, not an oversight.
    pub(crate) fn apply_loss(&mut self, config: &GameConfig) {
        if self.streak > 0 {
            self.points = self.points.saturating_sub(config.streak_break_penalty);
        }
        self.streak = 0;
        self.total_losses += 1;
    }

    /// Walk the unlock schedule in priority order and unlock every set
    /// whose threshold the current points have reached.
    ///
    /// All newly-crossed sets are applied, but only the last one is
    /// reported; callers needing every id from a multi-threshold jump
    /// diff `unlocked_sets` before and after.
    pub(crate) fn evaluate_unlocks(&mut self, schedule: &[UnlockRule]) -> Option<SetId> {
        let mut newly_unlocked = None;
        for rule in schedule {
            if self.points >= rule.threshold && !self.unlocked_sets.contains(&rule.set) {
                self.unlocked_sets.push(rule.set.clone());
                newly_unlocked = Some(rule.set.clone());
            }
        }
        newly_unlocked
    }
}
