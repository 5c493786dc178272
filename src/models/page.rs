//! Paginated list responses.

use serde::{Deserialize, Serialize};

use super::common::NamedRef;

/// One page of the catalog list endpoint.
///
/// Each entry in `results` is a lightweight stub carrying only the item's
/// name and the URL of its full detail resource. Ordering of `results` is
/// the upstream page order and must be preserved downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PokemonPage {
    /// Total number of items in the catalog.
    #[serde(default)]
    pub count: u64,

    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// Stubs for this page, in upstream order.
    #[serde(default)]
    pub results: Vec<NamedRef>,
}
