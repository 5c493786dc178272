//! # Rustedex
//!
//! A Rust library for browsing the public PokeAPI catalog.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`Pokedex`] struct:
//!
//! ```rust,no_run
//! use rustedex::Pokedex;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dex = Pokedex::new();
//!
//!     // Load one page of display-ready summaries
//!     let summaries = dex.load_catalog(20).await?;
//!     for summary in &summaries {
//!         println!("{} [{}]", summary.display_name(), summary.types.join(", "));
//!     }
//!
//!     // Resolve one item into a full detail view
//!     let detail = dex.load_detail("pikachu").await?;
//!     println!("{} {}: {}", detail.formatted_id(), detail.display_name(), detail.description);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Catalog aggregation**: one page fetch fanned out into concurrent
//!   per-item detail fetches, joined all-or-nothing, in page order
//! - **Detail resolution** with species flavor text, language selection,
//!   and line-break normalization
//! - **Screen state** with a stale-result guard for late responses
//!
//! ## Low-Level APIs
//!
//! For more control, you can use the lower-level pieces directly:
//!
//! - [`PokeApi`] - HTTP client for the raw API endpoints
//! - [`api::CatalogSource`] - the trait to implement for alternate backends
//! - [`converters`] - pure wire-to-display reductions

pub mod api;
pub mod converters;
pub mod error;
pub mod models;
mod pokedex;
pub mod screen;

// Main interface (recommended)
pub use pokedex::{Pokedex, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE};

// Low-level APIs
pub use api::PokeApi;
pub use error::PokedexError;
pub use models::{PokemonDetail, PokemonSummary};
pub use screen::{LoadState, ScreenSlot};
