//! Card sets: named, identified collections of cards.
//!
//! A set may carry an unlock threshold - the points a player must have
//! accumulated before the set's cards join the play pool. Which sets are
//! gated and in what priority order is configured on the progression
//! side; the catalog only stores the data.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Identifier for a card set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetId(pub String);

impl SetId {
    /// Create a new set identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of cards.
///
/// Matches the external data-file shape:
/// `{setName, setId, unlockAt?, cards: [...]}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    /// Unique identifier for this set.
    pub set_id: SetId,

    /// Display name.
    pub set_name: String,

    /// Points required before this set becomes accessible.
    /// `None` for sets available from the start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_at: Option<u64>,

    /// The cards of this set, in data-file order.
    pub cards: Vec<Card>,
}

impl CardSet {
    /// Create a new empty set.
    pub fn new(set_id: impl Into<SetId>, set_name: impl Into<String>) -> Self {
        Self {
            set_id: set_id.into(),
            set_name: set_name.into(),
            unlock_at: None,
            cards: Vec::new(),
        }
    }

    /// Set the unlock threshold (builder pattern).
    #[must_use]
    pub fn with_unlock_at(mut self, points: u64) -> Self {
        self.unlock_at = Some(points);
        self
    }

    /// Add a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Number of cards in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the set has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::card::Rarity;

    #[test]
    fn test_set_builder() {
        let set = CardSet::new("pokemon", "Pokemon")
            .with_unlock_at(500)
            .with_card(Card::new("pikachu", "Pikachu", Rarity::Rare).with_attr("power", 55));

        assert_eq!(set.set_id, SetId::new("pokemon"));
        assert_eq!(set.unlock_at, Some(500));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_set_wire_shape() {
        let set = CardSet::new("wwe", "WWE Superstars");
        let json = serde_json::to_string(&set).unwrap();

        // camelCase keys, unlockAt omitted when absent
        assert!(json.contains("\"setId\":\"wwe\""));
        assert!(json.contains("\"setName\":\"WWE Superstars\""));
        assert!(!json.contains("unlockAt"));
    }

    #[test]
    fn test_set_from_data_file() {
        let set: CardSet = serde_json::from_str(
            r#"{
                "setName": "Pokemon",
                "setId": "pokemon",
                "unlockAt": 500,
                "cards": [
                    {"id": "p1", "name": "Pikachu",
                     "attributes": {"power": 55}, "rarity": "rare"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(set.set_id.as_str(), "pokemon");
        assert_eq!(set.unlock_at, Some(500));
        assert_eq!(set.cards[0].attribute("power"), Some(55));
    }
}
