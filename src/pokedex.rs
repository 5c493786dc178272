//! Unified Pokedex interface.
//!
//! This module provides the high-level catalog operations: aggregate one
//! page of the catalog into display-ready summaries, and resolve a single
//! item into a display-ready detail view.

use futures_util::future::try_join_all;
use tracing::debug;

use crate::api::{CatalogSource, PokeApi};
use crate::converters;
use crate::error::{PokedexError, Result};
use crate::models::{PokemonDetail, PokemonSummary};

/// Page size used by the list screen.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default flavor text language tag.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Main Pokedex interface.
///
/// Generic over its [`CatalogSource`] so the aggregation logic can be
/// exercised against a simulated upstream; defaults to the live [`PokeApi`].
///
/// # Example
///
/// ```rust,no_run
/// use rustedex::Pokedex;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dex = Pokedex::new();
///
///     // One page of display-ready summaries
///     let summaries = dex.load_catalog(20).await?;
///     println!("Loaded {} Pokemon", summaries.len());
///
///     // Full detail for one item
///     let detail = dex.load_detail("Pikachu").await?;
///     println!("{} {}", detail.formatted_id(), detail.display_name());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pokedex<S = PokeApi> {
    source: S,
    language: String,
}

impl Pokedex<PokeApi> {
    /// Create a Pokedex backed by the live PokeAPI.
    pub fn new() -> Self {
        Self::with_source(PokeApi::new())
    }
}

impl Default for Pokedex<PokeApi> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CatalogSource> Pokedex<S> {
    /// Create a Pokedex over an arbitrary catalog source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Set the flavor text language tag.
    pub fn set_language<L: Into<String>>(&mut self, language: L) {
        self.language = language.into();
    }

    /// Load one page of the catalog as display-ready summaries.
    ///
    /// Fetches `page_size` stubs, then fans out one detail request per stub
    /// and joins on all of them. The join is all-or-nothing: if any single
    /// detail fetch fails the whole load fails, so the caller never sees a
    /// partial list. Output order matches the upstream page order.
    pub async fn load_catalog(&self, page_size: u32) -> Result<Vec<PokemonSummary>> {
        let page = self.source.fetch_page(page_size).await?;
        debug!("fetched page with {} stubs", page.results.len());

        let details = try_join_all(
            page.results
                .iter()
                .map(|stub| self.source.fetch_pokemon_by_url(&stub.url)),
        )
        .await?;

        Ok(page
            .results
            .iter()
            .zip(details.iter())
            .map(|(stub, pokemon)| converters::summary_from_pokemon(&stub.name, pokemon))
            .collect())
    }

    /// Load the full detail view for one catalog item.
    ///
    /// The identifier is case-insensitive; upstream keys are lower-case.
    /// Resolution follows the item's species reference for flavor text and
    /// merges everything into one record. Any failure at any step yields an
    /// error, never a partial detail; an empty identifier is
    /// [`PokedexError::MissingIdentifier`].
    pub async fn load_detail(&self, identifier: &str) -> Result<PokemonDetail> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(PokedexError::MissingIdentifier);
        }
        let key = identifier.to_lowercase();

        let pokemon = self.source.fetch_pokemon(&key).await?;
        let species = self.source.fetch_species(&pokemon.species.url).await?;

        let description =
            converters::resolve_description(&species.flavor_text_entries, &self.language);

        Ok(converters::detail_from_pokemon(&pokemon, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::converters::NO_DESCRIPTION;
    use crate::models::pokemon::{Sprites, TypeSlot};
    use crate::models::{FlavorEntry, NamedRef, Pokemon, PokemonPage, PokemonSpecies};

    fn detail_url(name: &str) -> String {
        format!("fake://pokemon/{}", name)
    }

    fn species_url(name: &str) -> String {
        format!("fake://species/{}", name)
    }

    fn make_pokemon(id: u32, name: &str, type_name: &str) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            height: id,
            weight: id * 10,
            sprites: Sprites {
                front_default: Some(format!("{}.png", name)),
                ..Default::default()
            },
            types: vec![TypeSlot {
                slot: 1,
                type_: NamedRef::new(type_name, ""),
            }],
            stats: Vec::new(),
            species: NamedRef::new(name, species_url(name)),
        }
    }

    /// Simulated upstream keyed by lower-case names, like the real API.
    struct FakeSource {
        order: Vec<String>,
        pokemon: HashMap<String, Pokemon>,
        species: HashMap<String, PokemonSpecies>,
        fail_detail_for: Option<String>,
    }

    impl FakeSource {
        fn new(names: &[&str]) -> Self {
            let mut pokemon = HashMap::new();
            let mut species = HashMap::new();
            for (i, name) in names.iter().enumerate() {
                pokemon.insert(name.to_string(), make_pokemon(i as u32 + 1, name, "normal"));
                species.insert(
                    species_url(name),
                    PokemonSpecies {
                        name: name.to_string(),
                        flavor_text_entries: vec![FlavorEntry::new(format!("About {}.", name), "en")],
                    },
                );
            }
            Self {
                order: names.iter().map(|n| n.to_string()).collect(),
                pokemon,
                species,
                fail_detail_for: None,
            }
        }

        fn failing_on(mut self, name: &str) -> Self {
            self.fail_detail_for = Some(name.to_string());
            self
        }
    }

    impl CatalogSource for FakeSource {
        async fn fetch_page(&self, limit: u32) -> Result<PokemonPage> {
            let results = self
                .order
                .iter()
                .take(limit as usize)
                .map(|name| NamedRef::new(name.clone(), detail_url(name)))
                .collect::<Vec<_>>();
            Ok(PokemonPage {
                count: self.order.len() as u64,
                results,
                ..Default::default()
            })
        }

        async fn fetch_pokemon_by_url(&self, url: &str) -> Result<Pokemon> {
            let name = url.rsplit('/').next().unwrap_or_default();
            self.fetch_pokemon(name).await
        }

        async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
            if self.fail_detail_for.as_deref() == Some(name) {
                return Err(PokedexError::ApiError(format!("simulated failure: {}", name)));
            }
            self.pokemon
                .get(name)
                .cloned()
                .ok_or_else(|| PokedexError::PokemonNotFound(name.to_string()))
        }

        async fn fetch_species(&self, url: &str) -> Result<PokemonSpecies> {
            self.species
                .get(url)
                .cloned()
                .ok_or_else(|| PokedexError::SpeciesNotFound(url.to_string()))
        }
    }

    const NAMES: &[&str] = &["bulbasaur", "charmander", "squirtle", "pikachu"];

    #[tokio::test]
    async fn test_load_catalog_returns_page_in_order() {
        let dex = Pokedex::with_source(FakeSource::new(NAMES));
        let summaries = dex.load_catalog(4).await.unwrap();
        assert_eq!(summaries.len(), 4);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, NAMES);
        assert_eq!(summaries[3].image, Some("pikachu.png".to_string()));
    }

    #[tokio::test]
    async fn test_load_catalog_empty_page() {
        let dex = Pokedex::with_source(FakeSource::new(NAMES));
        let summaries = dex.load_catalog(0).await.unwrap();
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_fails_when_any_detail_fails() {
        // Every position k must sink the whole aggregation.
        for name in NAMES {
            let dex = Pokedex::with_source(FakeSource::new(NAMES).failing_on(name));
            let result = dex.load_catalog(4).await;
            assert!(result.is_err(), "expected failure when {} fails", name);
        }
    }

    #[tokio::test]
    async fn test_load_detail_merges_description() {
        let dex = Pokedex::with_source(FakeSource::new(NAMES));
        let detail = dex.load_detail("pikachu").await.unwrap();
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.description, "About pikachu.");
    }

    #[tokio::test]
    async fn test_load_detail_is_case_insensitive() {
        let dex = Pokedex::with_source(FakeSource::new(NAMES));
        let upper = dex.load_detail("Pikachu").await.unwrap();
        let lower = dex.load_detail("pikachu").await.unwrap();
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn test_load_detail_missing_identifier() {
        let dex = Pokedex::with_source(FakeSource::new(NAMES));
        assert!(matches!(
            dex.load_detail("").await,
            Err(PokedexError::MissingIdentifier)
        ));
        assert!(matches!(
            dex.load_detail("   ").await,
            Err(PokedexError::MissingIdentifier)
        ));
    }

    #[tokio::test]
    async fn test_load_detail_unknown_name() {
        let dex = Pokedex::with_source(FakeSource::new(NAMES));
        assert!(matches!(
            dex.load_detail("missingno").await,
            Err(PokedexError::PokemonNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_load_detail_language_fallback() {
        let mut dex = Pokedex::with_source(FakeSource::new(NAMES));
        dex.set_language("ja");
        let detail = dex.load_detail("pikachu").await.unwrap();
        assert_eq!(detail.description, NO_DESCRIPTION);
    }
}
