//! Card catalog: registry of all card sets.
//!
//! The `CardCatalog` stores every set the game ships, locked or not, and
//! assembles the combined card pool of whichever sets the player has
//! unlocked. Read-only at runtime once populated.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::set::{CardSet, SetId};
use crate::core::GameError;

/// Registry of card sets.
///
/// ## Example
///
/// ```
/// use cardclash::catalog::{Card, CardCatalog, CardSet, Rarity, SetId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardSet::new("wwe", "WWE Superstars")
///         .with_card(Card::new("w1", "Big Show", Rarity::Common).with_attr("strength", 88)),
/// );
///
/// let pool = catalog.pool(&[SetId::new("wwe")]).unwrap();
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    sets: FxHashMap<SetId, CardSet>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card set.
    ///
    /// Panics if a set with the same ID already exists.
    pub fn register(&mut self, set: CardSet) {
        if self.sets.contains_key(&set.set_id) {
            panic!("Card set {:?} already registered", set.set_id);
        }
        self.sets.insert(set.set_id.clone(), set);
    }

    /// Register a set parsed from its JSON data file.
    ///
    /// Returns the registered set's ID.
    pub fn register_json(&mut self, json: &str) -> Result<SetId, GameError> {
        let set: CardSet =
            serde_json::from_str(json).map_err(|e| GameError::MalformedSetData(e.to_string()))?;
        let id = set.set_id.clone();
        self.register(set);
        Ok(id)
    }

    /// Get a card set by ID.
    #[must_use]
    pub fn get(&self, id: &SetId) -> Option<&CardSet> {
        self.sets.get(id)
    }

    /// Get a card set by ID, or an `UnknownSet` error.
    pub fn require(&self, id: &SetId) -> Result<&CardSet, GameError> {
        self.sets
            .get(id)
            .ok_or_else(|| GameError::UnknownSet(id.clone()))
    }

    /// Check if a set ID is registered.
    #[must_use]
    pub fn contains(&self, id: &SetId) -> bool {
        self.sets.contains_key(id)
    }

    /// Number of registered sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate over all registered sets.
    pub fn iter(&self) -> impl Iterator<Item = &CardSet> {
        self.sets.values()
    }

    /// Assemble the combined card pool of the given unlocked sets.
    ///
    /// Errors with `UnknownSet` if any identifier isn't registered. The
    /// pool preserves the order the set IDs were given in, then data-file
    /// card order within each set, so draws are reproducible under a
    /// fixed seed.
    pub fn pool(&self, unlocked: &[SetId]) -> Result<Vec<&Card>, GameError> {
        let mut pool = Vec::new();
        for id in unlocked {
            let set = self.require(id)?;
            pool.extend(set.cards.iter());
        }
        Ok(pool)
    }
}
