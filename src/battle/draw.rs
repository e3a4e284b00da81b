//! Random card and attribute selection.
//!
//! Uniform draws over the candidates. Empty input yields `None`; the
//! round controller checks for an empty pool before drawing and signals
//! a no-cards condition instead.

use crate::catalog::Card;
use crate::core::GameRng;

/// Pick a random card from a pool.
#[must_use]
pub fn pick_random_card<'a>(rng: &mut GameRng, pool: &[&'a Card]) -> Option<&'a Card> {
    rng.choose(pool).copied()
}

/// Pick a random attribute name from a card.
///
/// Candidates are the card's sorted attribute names, so a fixed seed
/// reproduces the draw regardless of map iteration order.
#[must_use]
pub fn pick_random_attribute(rng: &mut GameRng, card: &Card) -> Option<String> {
    let names = card.attribute_names();
    rng.choose(&names).map(|name| (*name).to_string())
}
