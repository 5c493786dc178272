//! Species records and flavor text.

use serde::{Deserialize, Serialize};

use super::common::NamedRef;

/// A localized descriptive text snippet.
///
/// The upstream API supplies these as an ordered append log: newer game
/// versions append at the end, so the most recent text for a language is the
/// last matching entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlavorEntry {
    /// Raw flavor text. May contain `\f` and `\n` as intra-paragraph line
    /// break hints.
    #[serde(default)]
    pub flavor_text: String,

    /// Language tag of this entry.
    #[serde(default)]
    pub language: NamedRef,
}

impl FlavorEntry {
    /// Create a new entry with text and language tag.
    pub fn new<S1: Into<String>, S2: Into<String>>(text: S1, language: S2) -> Self {
        Self {
            flavor_text: text.into(),
            language: NamedRef::new(language, ""),
        }
    }
}

/// A raw species record from the species endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PokemonSpecies {
    /// Lower-case name slug.
    #[serde(default)]
    pub name: String,

    /// Flavor text entries in upstream append order.
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorEntry>,
}
