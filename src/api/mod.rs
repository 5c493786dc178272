//! API client for the PokeAPI catalog.
//!
//! [`PokeApi`] talks to the live HTTP API; [`CatalogSource`] is the seam the
//! aggregation layer works against, so tests can substitute a simulated
//! upstream.

pub mod client;

pub use client::PokeApi;

use crate::error::Result;
use crate::models::{Pokemon, PokemonPage, PokemonSpecies};

/// Read-only source of catalog records.
///
/// Implemented by [`PokeApi`] for the live API and by in-memory fakes in
/// tests.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetch one page of `limit` summary stubs.
    async fn fetch_page(&self, limit: u32) -> Result<PokemonPage>;

    /// Fetch a full detail record from the absolute URL in a page stub.
    async fn fetch_pokemon_by_url(&self, url: &str) -> Result<Pokemon>;

    /// Fetch a full detail record by its lower-case name slug.
    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon>;

    /// Fetch a species record from the absolute URL in a detail record.
    async fn fetch_species(&self, url: &str) -> Result<PokemonSpecies>;
}
