//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// A named reference to another API resource.
///
/// PokeAPI uses this `{name, url}` pair everywhere: page stubs, type tags,
/// stat names, species references, language tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NamedRef {
    /// Resource name (lower-case slug).
    pub name: String,

    /// URL of the full resource. Some nested contexts omit it.
    #[serde(default)]
    pub url: String,
}

impl NamedRef {
    /// Create a new reference with name and URL.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, url: S2) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Capitalize the first letter of a lower-case API slug for display.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
