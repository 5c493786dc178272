//! HTTP client for the public PokeAPI.
//!
//! No authentication is required; all endpoints are plain GETs returning
//! JSON.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::CatalogSource;
use crate::error::{PokedexError, Result};
use crate::models::{Pokemon, PokemonPage, PokemonSpecies};

/// Base URL for the public PokeAPI.
const API_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Public PokeAPI client.
///
/// # Example
///
/// ```rust,no_run
/// use rustedex::PokeApi;
/// use rustedex::api::CatalogSource;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = PokeApi::new();
///     let pokemon = api.fetch_pokemon("pikachu").await?;
///     println!("#{} {}", pokemon.id, pokemon.name);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: Client,
    base_url: String,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApi {
    /// Create a new client against the live API.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against an alternate base URL.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        let client = Client::builder()
            .user_agent(concat!("rustedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Make a GET request and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        let response = response.error_for_status().inspect_err(|e| {
            error!("PokeAPI request failed: {}", e);
        })?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CatalogSource for PokeApi {
    async fn fetch_page(&self, limit: u32) -> Result<PokemonPage> {
        self.get_json(&self.endpoint(&format!("pokemon?limit={}", limit)))
            .await
    }

    async fn fetch_pokemon_by_url(&self, url: &str) -> Result<Pokemon> {
        self.get_json(url).await
    }

    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_json(&self.endpoint(&format!("pokemon/{}", name)))
            .await
            .map_err(|e| match e {
                PokedexError::NotFound(_) => PokedexError::PokemonNotFound(name.to_string()),
                other => other,
            })
    }

    async fn fetch_species(&self, url: &str) -> Result<PokemonSpecies> {
        self.get_json(url).await.map_err(|e| match e {
            PokedexError::NotFound(_) => PokedexError::SpeciesNotFound(url.to_string()),
            other => other,
        })
    }
}
