//! Card data: the immutable unit of play.
//!
//! A `Card` carries a mapping of named integer attributes ("power",
//! "speed", ...) that head-to-head comparisons are decided on, plus the
//! display data the presentation layer needs (name, image reference,
//! rarity). Cards are loaded once from catalog data and never mutated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Named integer attributes of a card.
///
/// The core doesn't interpret attribute names - card sets define them.
/// All cards within a set are expected to share the same attribute names
/// so any attribute drawn from one card exists on the other.
pub type Attributes = FxHashMap<String, i64>;

/// Rarity tag of a card.
///
/// Purely descriptive - the core never branches on rarity. The
/// presentation layer uses it for theming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        write!(f, "{}", name)
    }
}

/// A single playable card.
///
/// Immutable once loaded from the catalog. The `id` is unique within its
/// card set; `image` is an opaque asset reference for the presentation
/// layer.
///
/// ## Example
///
/// ```
/// use cardclash::catalog::{Card, Rarity};
///
/// let card = Card::new("pikachu", "Pikachu", Rarity::Rare)
///     .with_attr("power", 55)
///     .with_attr("speed", 90);
///
/// assert_eq!(card.attribute("speed"), Some(90));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Identifier, unique within the owning set.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Asset reference for the presentation layer.
    #[serde(default)]
    pub image: String,

    /// Named integer attributes used for comparison.
    pub attributes: Attributes,

    /// Rarity tag.
    pub rarity: Rarity,
}

impl Card {
    /// Create a new card with no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            attributes: Attributes::default(),
            rarity,
        }
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: i64) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<i64> {
        self.attributes.get(name).copied()
    }

    /// Attribute names of this card, sorted.
    ///
    /// Sorted so selection under a fixed seed reproduces regardless of
    /// map iteration order.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
