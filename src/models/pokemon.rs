//! The raw per-item detail record.
//!
//! This is the wire shape of the `pokemon/{name}` endpoint, narrowed to the
//! fields the catalog actually consumes.

use serde::{Deserialize, Serialize};

use super::common::NamedRef;

/// A type tag slot on a Pokemon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypeSlot {
    /// Slot order (1-indexed); slot 1 is the primary type.
    #[serde(default)]
    pub slot: u32,

    /// The type tag itself.
    #[serde(rename = "type")]
    pub type_: NamedRef,
}

/// A base-stat entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatSlot {
    /// Base value of the stat.
    pub base_stat: i64,

    /// Name of the stat ("hp", "attack", ...).
    pub stat: NamedRef,
}

/// Nested "official-artwork" sprite block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Front-facing artwork image URL, if present.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Alternate sprite sources nested under `sprites.other`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OtherSprites {
    /// High-resolution official artwork.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

/// Sprite image references.
///
/// Every field may be absent upstream; absence maps to `None`, never an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sprites {
    /// Default front-facing sprite URL.
    #[serde(default)]
    pub front_default: Option<String>,

    /// Default back-facing sprite URL.
    #[serde(default)]
    pub back_default: Option<String>,

    /// Alternate sprite sources.
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Image for list display: the default sprite, falling back to the
    /// official artwork when the sprite is absent.
    pub fn list_image(&self) -> Option<String> {
        self.front_default
            .clone()
            .or_else(|| self.artwork_front())
    }

    /// Image for detail display: the official artwork, falling back to the
    /// default sprite.
    pub fn detail_image(&self) -> Option<String> {
        self.artwork_front().or_else(|| self.front_default.clone())
    }

    fn artwork_front(&self) -> Option<String> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.clone())
    }
}

/// A full raw Pokemon record from the detail endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pokemon {
    /// Numeric catalog id.
    pub id: u32,

    /// Lower-case name slug.
    pub name: String,

    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,

    /// Sprite image references.
    #[serde(default)]
    pub sprites: Sprites,

    /// Type tags in slot order. The API guarantees at least one.
    #[serde(default)]
    pub types: Vec<TypeSlot>,

    /// Base stats in upstream order.
    #[serde(default)]
    pub stats: Vec<StatSlot>,

    /// Reference to the species resource carrying flavor text.
    #[serde(default)]
    pub species: NamedRef,
}

impl Pokemon {
    /// Type tag names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.type_.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprites_list_image_prefers_front_default() {
        let sprites = Sprites {
            front_default: Some("front.png".to_string()),
            other: Some(OtherSprites {
                official_artwork: Some(Artwork {
                    front_default: Some("artwork.png".to_string()),
                }),
            }),
            ..Default::default()
        };
        assert_eq!(sprites.list_image(), Some("front.png".to_string()));
        assert_eq!(sprites.detail_image(), Some("artwork.png".to_string()));
    }

    #[test]
    fn test_sprites_list_image_falls_back_to_artwork() {
        let sprites = Sprites {
            front_default: None,
            other: Some(OtherSprites {
                official_artwork: Some(Artwork {
                    front_default: Some("artwork.png".to_string()),
                }),
            }),
            ..Default::default()
        };
        assert_eq!(sprites.list_image(), Some("artwork.png".to_string()));
    }

    #[test]
    fn test_sprites_all_absent_is_none() {
        let sprites: Sprites = serde_json::from_str("{}").unwrap();
        assert_eq!(sprites.list_image(), None);
        assert_eq!(sprites.detail_image(), None);
        assert_eq!(sprites.back_default, None);
    }

    #[test]
    fn test_pokemon_deserialize_minimal() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "sprites": {"front_default": null, "back_default": "back.png"},
            "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
            "stats": [{"base_stat": 35, "stat": {"name": "hp", "url": ""}}],
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.type_names(), vec!["electric"]);
        assert_eq!(pokemon.sprites.front_default, None);
        assert_eq!(pokemon.sprites.back_default, Some("back.png".to_string()));
    }
}
