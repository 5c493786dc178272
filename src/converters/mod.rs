//! Wire record to display model converters.
//!
//! Pure reduction functions: given raw API records, produce the
//! display-ready summary and detail models. No I/O happens here.

use crate::models::{FlavorEntry, Pokemon, PokemonDetail, PokemonSummary, Stat};

/// Fallback description when no flavor text matches the target language.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Reduce a raw detail record into a list summary.
///
/// Image selection: default front sprite, falling back to the official
/// artwork; the back sprite may be absent and stays optional.
pub fn summary_from_pokemon(name: &str, pokemon: &Pokemon) -> PokemonSummary {
    PokemonSummary {
        name: name.to_string(),
        image: pokemon.sprites.list_image(),
        image_back: pokemon.sprites.back_default.clone(),
        types: pokemon.type_names(),
    }
}

/// Merge a raw detail record with a resolved description into a detail view.
pub fn detail_from_pokemon(pokemon: &Pokemon, description: String) -> PokemonDetail {
    PokemonDetail {
        id: pokemon.id,
        name: pokemon.name.clone(),
        height: pokemon.height,
        weight: pokemon.weight,
        types: pokemon.type_names(),
        stats: pokemon
            .stats
            .iter()
            .map(|s| Stat::new(s.stat.name.clone(), s.base_stat))
            .collect(),
        image: pokemon.sprites.detail_image(),
        description,
    }
}

/// Select the flavor text for a language from an append-ordered entry log.
///
/// Scans from the end so the most recently appended matching entry wins.
pub fn select_flavor_text<'a>(entries: &'a [FlavorEntry], language: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.language.name == language)
        .map(|entry| entry.flavor_text.as_str())
}

/// Flatten the intra-paragraph line break hints (`\f`, `\n`) to spaces.
pub fn normalize_flavor_text(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '\u{000C}' || c == '\n' { ' ' } else { c })
        .collect()
}

/// Resolve the description for a detail view: select by language, normalize,
/// fall back to [`NO_DESCRIPTION`] when nothing matches.
pub fn resolve_description(entries: &[FlavorEntry], language: &str) -> String {
    select_flavor_text(entries, language)
        .map(normalize_flavor_text)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}
