//! Display-ready list entries.

use serde::{Deserialize, Serialize};

use super::common::capitalize;

/// A display-ready summary of one catalog item.
///
/// Produced by the catalog aggregator; immutable once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PokemonSummary {
    /// Lower-case name slug; unique within a page.
    pub name: String,

    /// Primary display image URL, if any sprite was available.
    pub image: Option<String>,

    /// Back-facing sprite URL, if available.
    pub image_back: Option<String>,

    /// Type tag names in slot order; never empty for valid upstream data.
    pub types: Vec<String>,
}

impl PokemonSummary {
    /// Name with the first letter capitalized for display.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// The primary (slot 1) type tag, used to pick the card color.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.as_str())
    }
}
