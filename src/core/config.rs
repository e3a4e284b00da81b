//! Progression configuration.
//!
//! The rules the store runs on are injected at construction rather than
//! read from module-level constants: win reward, streak-break penalty,
//! which sets start unlocked, and the unlock schedule. `Default` carries
//! the shipped values.

use serde::{Deserialize, Serialize};

use crate::catalog::SetId;

/// One entry of the unlock schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRule {
    /// The set gated behind the threshold.
    pub set: SetId,

    /// Cumulative points required to unlock the set.
    pub threshold: u64,
}

impl UnlockRule {
    /// Create a new unlock rule.
    pub fn new(set: impl Into<SetId>, threshold: u64) -> Self {
        Self {
            set: set.into(),
            threshold,
        }
    }
}

/// Progression rules.
///
/// The unlock schedule is walked in order on every win; keep it sorted
/// by ascending threshold so the last newly-crossed entry is also the
/// highest one.
///
/// ## Example
///
/// ```
/// use cardclash::core::{GameConfig, UnlockRule};
///
/// let config = GameConfig::default()
///     .with_points_per_win(10)
///     .with_unlock_rule(UnlockRule::new("mythic", 5000));
///
/// assert_eq!(config.points_per_win, 10);
/// assert_eq!(config.unlock_schedule.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Points awarded per recorded win.
    pub points_per_win: u64,

    /// Points forfeited when a positive streak breaks.
    pub streak_break_penalty: u64,

    /// Sets unlocked from the first session, always present.
    pub initial_sets: Vec<SetId>,

    /// Gated sets in unlock priority order.
    pub unlock_schedule: Vec<UnlockRule>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_win: 5,
            streak_break_penalty: 2,
            initial_sets: vec![SetId::new("wwe"), SetId::new("cricket")],
            unlock_schedule: vec![
                UnlockRule::new("pokemon", 500),
                UnlockRule::new("doraemon", 1000),
                UnlockRule::new("wwf", 1500),
            ],
        }
    }
}

impl GameConfig {
    /// Set the win reward (builder pattern).
    #[must_use]
    pub fn with_points_per_win(mut self, points: u64) -> Self {
        self.points_per_win = points;
        self
    }

    /// Set the streak-break penalty (builder pattern).
    #[must_use]
    pub fn with_streak_break_penalty(mut self, points: u64) -> Self {
        self.streak_break_penalty = points;
        self
    }

    /// Replace the initially-unlocked sets (builder pattern).
    #[must_use]
    pub fn with_initial_sets(mut self, sets: Vec<SetId>) -> Self {
        self.initial_sets = sets;
        self
    }

    /// Replace the unlock schedule (builder pattern).
    #[must_use]
    pub fn with_unlock_schedule(mut self, schedule: Vec<UnlockRule>) -> Self {
        self.unlock_schedule = schedule;
        self
    }

    /// Append an unlock rule (builder pattern).
    #[must_use]
    pub fn with_unlock_rule(mut self, rule: UnlockRule) -> Self {
        self.unlock_schedule.push(rule);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.points_per_win, 5);
        assert_eq!(config.streak_break_penalty, 2);
        assert_eq!(
            config.initial_sets,
            vec![SetId::new("wwe"), SetId::new("cricket")]
        );
        assert_eq!(config.unlock_schedule.len(), 3);
        assert_eq!(config.unlock_schedule[0], UnlockRule::new("pokemon", 500));
        assert_eq!(config.unlock_schedule[1], UnlockRule::new("doraemon", 1000));
        assert_eq!(config.unlock_schedule[2], UnlockRule::new("wwf", 1500));
    }

    #[test]
    fn test_schedule_is_ascending() {
        let config = GameConfig::default();
        let thresholds: Vec<u64> = config
            .unlock_schedule
            .iter()
            .map(|r| r.threshold)
            .collect();
        let mut sorted = thresholds.clone();
        sorted.sort_unstable();
        assert_eq!(thresholds, sorted);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::default()
            .with_points_per_win(7)
            .with_streak_break_penalty(3)
            .with_initial_sets(vec![SetId::new("base")])
            .with_unlock_schedule(vec![UnlockRule::new("expansion", 100)]);

        assert_eq!(config.points_per_win, 7);
        assert_eq!(config.streak_break_penalty, 3);
        assert_eq!(config.initial_sets, vec![SetId::new("base")]);
        assert_eq!(config.unlock_schedule, vec![UnlockRule::new("expansion", 100)]);
    }
}
