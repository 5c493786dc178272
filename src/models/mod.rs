//! Data models for PokeAPI responses and display.
//!
//! Wire-shaped records (`Pokemon`, `PokemonSpecies`, `PokemonPage`) mirror
//! the upstream JSON; display records (`PokemonSummary`, `PokemonDetail`)
//! are what the aggregation layer hands to callers.

pub mod color;
pub mod common;
pub mod detail;
pub mod page;
pub mod pokemon;
pub mod species;
pub mod summary;

// Re-exports for convenience
pub use color::{color_for_type, hex_to_rgba, DEFAULT_TYPE_COLOR};
pub use common::NamedRef;
pub use detail::{PokemonDetail, Stat, MAX_BASE_STAT};
pub use page::PokemonPage;
pub use pokemon::{Pokemon, Sprites, StatSlot, TypeSlot};
pub use species::{FlavorEntry, PokemonSpecies};
pub use summary::PokemonSummary;
