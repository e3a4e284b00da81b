//! Head-to-head card comparison.
//!
//! A pure function of two cards and an attribute name: the strictly
//! greater value wins, equality is a draw, and the difference is always
//! the non-negative absolute delta.

use serde::{Deserialize, Serialize};

use crate::catalog::Card;
use crate::core::GameError;

/// Which side won a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
    Draw,
}

/// Outcome of comparing two cards on one attribute.
///
/// Transient - computed per flip, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Who had the strictly greater value.
    pub winner: Winner,

    /// The player card's value under the compared attribute.
    pub player_value: i64,

    /// The opponent card's value under the compared attribute.
    pub opponent_value: i64,

    /// Absolute delta between the two values; 0 on a draw.
    pub difference: i64,
}

/// Compare two cards on the given attribute.
///
/// Callers normally guarantee the attribute exists on both cards by
/// drawing it from one of them and playing within a catalog whose sets
/// share an attribute schema; a card without the attribute is surfaced
/// as `MissingAttribute` rather than guessed around.
pub fn compare(
    player: &Card,
    opponent: &Card,
    attribute: &str,
) -> Result<ComparisonResult, GameError> {
    let player_value = require_attr(player, attribute)?;
    let opponent_value = require_attr(opponent, attribute)?;

    let winner = match player_value.cmp(&opponent_value) {
        std::cmp::Ordering::Greater => Winner::Player,
        std::cmp::Ordering::Less => Winner::Opponent,
        std::cmp::Ordering::Equal => Winner::Draw,
    };

    Ok(ComparisonResult {
        winner,
        player_value,
        opponent_value,
        difference: (player_value - opponent_value).abs(),
    })
}

fn require_attr(card: &Card, attribute: &str) -> Result<i64, GameError> {
    card.attribute(attribute)
        .ok_or_else(|| GameError::MissingAttribute {
            card: card.id.clone(),
            attribute: attribute.to_string(),
        })
}
