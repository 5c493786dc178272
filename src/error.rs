//! Error types for the PokeAPI client.

use thiserror::Error;

/// Main error type for all catalog operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Pokemon was not found under the given identifier.
    #[error("Pokemon not found: {0}")]
    PokemonNotFound(String),

    /// Species record was not found.
    #[error("Species not found: {0}")]
    SpeciesNotFound(String),

    /// Resource was not found (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The caller supplied no identifier to resolve.
    #[error("Missing identifier: no Pokemon name was provided")]
    MissingIdentifier,

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Generic API error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, PokedexError>;
