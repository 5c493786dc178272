//! Display-ready detail records.

use serde::{Deserialize, Serialize};

use super::common::capitalize;

/// Maximum base stat value, used to scale stat bars.
pub const MAX_BASE_STAT: i64 = 255;

/// A named base stat with its value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    /// Stat name slug ("hp", "special-attack", ...).
    pub name: String,

    /// Base value.
    pub value: i64,
}

impl Stat {
    /// Create a new stat.
    pub fn new<S: Into<String>>(name: S, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Stat name formatted for display: dashes to spaces, upper-case.
    pub fn display_name(&self) -> String {
        self.name.replace('-', " ").to_uppercase()
    }

    /// Fraction of the maximum base stat, clamped to [0, 1].
    pub fn ratio(&self) -> f64 {
        (self.value as f64 / MAX_BASE_STAT as f64).clamp(0.0, 1.0)
    }
}

/// A display-ready detail view of one catalog item.
///
/// Produced by the detail resolver; immutable once constructed. Either the
/// whole record is available or nothing is, there is no partial detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PokemonDetail {
    /// Numeric catalog id.
    pub id: u32,

    /// Lower-case name slug.
    pub name: String,

    /// Height in decimetres, as supplied upstream.
    pub height: u32,

    /// Weight in hectograms, as supplied upstream.
    pub weight: u32,

    /// Type tag names in slot order; never empty for valid upstream data.
    pub types: Vec<String>,

    /// Base stats in upstream order.
    pub stats: Vec<Stat>,

    /// Detail image URL (official artwork, falling back to the sprite).
    pub image: Option<String>,

    /// Resolved and normalized description text.
    pub description: String,
}

impl PokemonDetail {
    /// Name with the first letter capitalized for display.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Catalog id formatted as "#NNN" with zero padding.
    pub fn formatted_id(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Height converted to metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight converted to kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// The primary (slot 1) type tag.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.as_str())
    }
}
