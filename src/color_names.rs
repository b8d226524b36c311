//! This module provides the standard named-color table: the familiar CSS color keywords, exposed
//! as an immutable process-wide lookup. Besides exact lookup in both directions, it can name the
//! *closest* entry to an arbitrary color, with closeness measured in CIELUV rather than by
//! channel differences: "nearest named color" is a perceptual question, and RGB distance answers
//! it badly for saturated colors.

use std::collections::HashMap;

use color::{Color, RGBColor};
use colors::CIELUVColor;
use coord::Coord;

lazy_static! {
    static ref NAMED_COLORS: HashMap<&'static str, RGBColor> = {
        let hex_table: HashMap<&'static str, &'static str> = hashmap! {
            "aliceblue" => "#F0F8FF",
            "beige" => "#F5F5DC",
            "black" => "#000000",
            "blue" => "#0000FF",
            "brown" => "#A52A2A",
            "chocolate" => "#D2691E",
            "coral" => "#FF7F50",
            "crimson" => "#DC143C",
            "cyan" => "#00FFFF",
            "darkblue" => "#00008B",
            "darkgreen" => "#006400",
            "darkorange" => "#FF8C00",
            "darkviolet" => "#9400D3",
            "forestgreen" => "#228B22",
            "gold" => "#FFD700",
            "gray" => "#808080",
            "green" => "#008000",
            "hotpink" => "#FF69B4",
            "indigo" => "#4B0082",
            "ivory" => "#FFFFF0",
            "khaki" => "#F0E68C",
            "lavender" => "#E6E6FA",
            "lime" => "#00FF00",
            "magenta" => "#FF00FF",
            "maroon" => "#800000",
            "navy" => "#000080",
            "olive" => "#808000",
            "orange" => "#FFA500",
            "orchid" => "#DA70D6",
            "pink" => "#FFC0CB",
            "plum" => "#DDA0DD",
            "purple" => "#800080",
            "red" => "#FF0000",
            "salmon" => "#FA8072",
            "seagreen" => "#2E8B57",
            "silver" => "#C0C0C0",
            "skyblue" => "#87CEEB",
            "slategray" => "#708090",
            "steelblue" => "#4682B4",
            "tan" => "#D2B48C",
            "teal" => "#008080",
            "tomato" => "#FF6347",
            "turquoise" => "#40E0D0",
            "violet" => "#EE82EE",
            "white" => "#FFFFFF",
            "yellow" => "#FFFF00",
        };
        hex_table
            .into_iter()
            // the literals above are all well-formed; the unit tests below re-check every entry
            .map(|(name, code)| (name, RGBColor::from_hex_code(code).unwrap()))
            .collect()
    };
}

/// Looks a color up by its CSS keyword, case-insensitively. Returns `None` for names not in the
/// table.
/// # Example
/// ```
/// # use viridian::color_names::lookup;
/// assert_eq!(lookup("Teal").unwrap().to_string(), "#008080");
/// assert!(lookup("not-a-color").is_none());
/// ```
pub fn lookup(name: &str) -> Option<RGBColor> {
    NAMED_COLORS.get(name.to_lowercase().as_str()).cloned()
}

/// The keyword for this exact device color, if it has one. Colors one integer step away from a
/// named color return `None`: use [`closest_name`](fn.closest_name.html) for fuzzy naming.
pub fn name_of(color: &RGBColor) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|&(_, named)| named == color)
        .map(|(&name, _)| name)
}

/// The keyword of the perceptually closest named color, by Euclidean distance in CIELUV. Always
/// succeeds, since the table is non-empty.
pub fn closest_name(color: &RGBColor) -> &'static str {
    let target: Coord = color.convert::<CIELUVColor>().into();
    let mut best_name = "black";
    let mut best_distance = ::std::f64::INFINITY;
    for (&name, named) in NAMED_COLORS.iter() {
        let candidate: Coord = named.convert::<CIELUVColor>().into();
        let distance = target.euclidean_distance(&candidate);
        if distance < best_distance {
            best_distance = distance;
            best_name = name;
        }
    }
    best_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_is_well_formed() {
        // forces the lazy table to build, which would panic on a bad literal
        assert!(NAMED_COLORS.len() >= 40);
    }

    #[test]
    fn test_lookup_both_directions() {
        let teal = lookup("teal").unwrap();
        assert_eq!(teal, RGBColor { r: 0, g: 128, b: 128 });
        assert_eq!(name_of(&teal), Some("teal"));
        assert_eq!(name_of(&RGBColor { r: 0, g: 128, b: 129 }), None);
        assert_eq!(lookup("TEAL"), lookup("teal"));
    }

    #[test]
    fn test_closest_name_is_exact_on_table_entries() {
        for name in &["red", "navy", "khaki", "white"] {
            assert_eq!(closest_name(&lookup(name).unwrap()), *name);
        }
    }

    #[test]
    fn test_closest_name_nearby() {
        // one step off pure red is still red
        let near_red = RGBColor { r: 254, g: 1, b: 0 };
        assert_eq!(closest_name(&near_red), "red");
        let near_white = RGBColor {
            r: 254,
            g: 255,
            b: 254,
        };
        assert_eq!(closest_name(&near_white), "white");
    }
}
