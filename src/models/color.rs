//! Presentation colors for type tags.
//!
//! A fixed lookup from type tag name to a hex display color. Not every tag
//! that the API can return is mapped; unmapped tags get the default color.

/// Fallback color for tags without a mapping.
pub const DEFAULT_TYPE_COLOR: &str = "#A8A77A";

/// Hex display color for a type tag name.
pub fn color_for_type(type_name: &str) -> &'static str {
    match type_name {
        "normal" => "#A8A77A",
        "fire" => "#EE8130",
        "water" => "#6390F0",
        "electric" => "#F7D02C",
        "grass" => "#7AC74C",
        "ice" => "#96D9D6",
        "fighting" => "#C22E28",
        "poison" => "#A33EA1",
        "ground" => "#E2BF65",
        "flying" => "#A98FF3",
        "psychic" => "#F95587",
        "bug" => "#A6B91A",
        "rock" => "#B6A136",
        "ghost" => "#735797",
        "dragon" => "#6F35FC",
        "dark" => "#705746",
        "steel" => "#B7B7CE",
        "fairy" => "#D685AD",
        _ => DEFAULT_TYPE_COLOR,
    }
}

/// Convert a `#RRGGBB` hex color to an `rgba(r, g, b, a)` string.
///
/// Returns `None` for malformed input.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}
