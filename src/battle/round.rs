//! One play round: draw two cards, flip, show the result.
//!
//! ## Phases
//!
//! `Ready` (cards drawn, awaiting the flip) → `Playing` (transient while
//! the attribute is chosen and the comparison computed) → `Result`
//! (outcome visible; terminal for the round until `start_new_round`
//! returns to `Ready` with fresh cards).
//!
//! The round controller is the only orchestrator: it gathers the pool
//! of all unlocked sets, draws both cards, runs the comparison, and
//! reports wins and losses to the progression store (a draw records
//! neither).

use crate::catalog::{Card, CardCatalog};
use crate::core::{GameError, GameRng};
use crate::progress::ProgressionStore;

use super::compare::{compare, ComparisonResult, Winner};
use super::draw::{pick_random_attribute, pick_random_card};

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Cards drawn, awaiting the player's flip.
    Ready,
    /// Attribute selection and comparison in flight.
    Playing,
    /// Outcome computed and visible.
    Result,
}

/// State of one play round.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use cardclash::battle::Round;
/// use cardclash::catalog::{Card, CardCatalog, CardSet, Rarity};
/// use cardclash::core::{GameConfig, GameRng};
/// use cardclash::progress::ProgressionStore;
/// use cardclash::storage::MemoryStorage;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardSet::new("wwe", "WWE")
///         .with_card(Card::new("w1", "Kane", Rarity::Common).with_attr("strength", 90))
///         .with_card(Card::new("w2", "Rey", Rarity::Rare).with_attr("strength", 70)),
/// );
/// let mut store = ProgressionStore::new(GameConfig::default(), Arc::new(MemoryStorage::new()));
/// let mut rng = GameRng::new(42);
///
/// let mut round = Round::new();
/// round.start_new_round(&catalog, &store, &mut rng).unwrap();
/// let outcome = round.flip(&mut store, &mut rng).unwrap();
/// // Both sides drew from the same 2-card pool: 20 apart, or the same card.
/// assert!(outcome.difference == 20 || outcome.difference == 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Round {
    phase: Option<RoundPhase>,
    player_card: Option<Card>,
    opponent_card: Option<Card>,
    selected_attribute: Option<String>,
    outcome: Option<ComparisonResult>,
}

impl Round {
    /// Create a round with no cards drawn yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase; `None` before the first `start_new_round`.
    #[must_use]
    pub fn phase(&self) -> Option<RoundPhase> {
        self.phase
    }

    /// The player's drawn card.
    #[must_use]
    pub fn player_card(&self) -> Option<&Card> {
        self.player_card.as_ref()
    }

    /// The opponent's drawn card.
    #[must_use]
    pub fn opponent_card(&self) -> Option<&Card> {
        self.opponent_card.as_ref()
    }

    /// The attribute the flip compared on, once flipped.
    #[must_use]
    pub fn selected_attribute(&self) -> Option<&str> {
        self.selected_attribute.as_deref()
    }

    /// The outcome of the flip, once flipped.
    #[must_use]
    pub fn outcome(&self) -> Option<&ComparisonResult> {
        self.outcome.as_ref()
    }

    /// Draw fresh cards from the combined pool of all unlocked sets and
    /// enter `Ready`.
    ///
    /// Both cards are drawn independently - the same card may land on
    /// both sides. An empty pool signals `NoCardsAvailable` and leaves
    /// the round untouched.
    pub fn start_new_round(
        &mut self,
        catalog: &CardCatalog,
        store: &ProgressionStore,
        rng: &mut GameRng,
    ) -> Result<(), GameError> {
        let pool = catalog.pool(store.state().unlocked_sets())?;
        if pool.is_empty() {
            return Err(GameError::NoCardsAvailable);
        }

        let player = match pick_random_card(rng, &pool) {
            Some(card) => card.clone(),
            None => return Err(GameError::NoCardsAvailable),
        };
        let opponent = match pick_random_card(rng, &pool) {
            Some(card) => card.clone(),
            None => return Err(GameError::NoCardsAvailable),
        };

        self.player_card = Some(player);
        self.opponent_card = Some(opponent);
        self.selected_attribute = None;
        self.outcome = None;
        self.phase = Some(RoundPhase::Ready);
        Ok(())
    }

    /// Flip: pick a random attribute from the player's card, compare,
    /// enter `Result`, and record the outcome on the store (a draw
    /// records neither a win nor a loss).
    ///
    /// Only valid from `Ready`; anything else is `RoundNotReady`. A
    /// failed comparison restores `Ready` without recording anything.
    pub fn flip(
        &mut self,
        store: &mut ProgressionStore,
        rng: &mut GameRng,
    ) -> Result<&ComparisonResult, GameError> {
        if self.phase != Some(RoundPhase::Ready) {
            return Err(GameError::RoundNotReady);
        }
        let (player, opponent) = match (&self.player_card, &self.opponent_card) {
            (Some(p), Some(o)) => (p.clone(), o.clone()),
            _ => return Err(GameError::RoundNotReady),
        };

        self.phase = Some(RoundPhase::Playing);

        let attribute = match pick_random_attribute(rng, &player) {
            Some(name) => name,
            None => {
                self.phase = Some(RoundPhase::Ready);
                return Err(GameError::MalformedSetData(format!(
                    "card {:?} has no attributes to compare",
                    player.id
                )));
            }
        };

        let outcome = match compare(&player, &opponent, &attribute) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.phase = Some(RoundPhase::Ready);
                return Err(e);
            }
        };

        match outcome.winner {
            Winner::Player => {
                store.record_win();
            }
            Winner::Opponent => store.record_loss(),
            Winner::Draw => {}
        }

        self.selected_attribute = Some(attribute);
        self.phase = Some(RoundPhase::Result);
        Ok(self.outcome.insert(outcome))
    }
}
