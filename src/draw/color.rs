//! RGBA color type, named palette and color-spec resolution.

use crate::error::SketchError;
use crate::util;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum similarity for an unknown color name to fall back to a palette entry.
const CLOSE_MATCH_CUTOFF: f64 = 0.5;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use phoenyx::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red, Color::rgb8(255, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 to 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Creates an opaque gray where every channel equals `level`.
    pub const fn gray8(level: u8) -> Self {
        Self::rgb8(level, level, level)
    }

    /// Returns the color as 8-bit RGB channels.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Perceived brightness (ITU-R BT.601 weights).
    pub fn brightness(self) -> f64 {
        self.r * 0.299 + self.g * 0.587 + self.b * 0.114
    }

    /// Black for light colors, white for dark ones.
    pub fn contrasting(self) -> Color {
        if self.brightness() > 0.5 { BLACK } else { WHITE }
    }

    /// Component-wise linear interpolation; `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub(crate) fn set_source(self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color::rgb8(255, 0, 0);
pub const GREEN: Color = Color::rgb8(0, 255, 0);
pub const BLUE: Color = Color::rgb8(0, 0, 255);
pub const YELLOW: Color = Color::rgb8(255, 255, 0);
pub const ORANGE: Color = Color::rgb8(255, 128, 0);
pub const PINK: Color = Color::rgb8(255, 0, 255);
pub const WHITE: Color = Color::rgb8(255, 255, 255);
pub const BLACK: Color = Color::rgb8(0, 0, 0);

/// Default window background (dark gray, 51).
pub const DARK_GRAY: Color = Color::gray8(51);

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Palette reachable by name. Lookups are case-insensitive.
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("orange", ORANGE),
    ("pink", PINK),
    ("white", WHITE),
    ("black", BLACK),
    ("gray", Color::gray8(128)),
    ("grey", Color::gray8(128)),
    ("lightgray", Color::gray8(200)),
    ("darkgray", DARK_GRAY),
    ("purple", Color::rgb8(128, 0, 128)),
    ("violet", Color::rgb8(238, 130, 238)),
    ("magenta", Color::rgb8(255, 0, 255)),
    ("cyan", Color::rgb8(0, 255, 255)),
    ("teal", Color::rgb8(0, 128, 128)),
    ("navy", Color::rgb8(0, 0, 128)),
    ("maroon", Color::rgb8(128, 0, 0)),
    ("olive", Color::rgb8(128, 128, 0)),
    ("lime", Color::rgb8(50, 205, 50)),
    ("brown", Color::rgb8(139, 69, 19)),
    ("gold", Color::rgb8(255, 215, 0)),
    ("silver", Color::rgb8(192, 192, 192)),
    ("salmon", Color::rgb8(250, 128, 114)),
    ("skyblue", Color::rgb8(135, 206, 235)),
    ("indigo", Color::rgb8(75, 0, 130)),
    ("turquoise", Color::rgb8(64, 224, 208)),
];

/// Looks up a palette color by exact (case-insensitive) name.
pub fn name_to_color(name: &str) -> Option<Color> {
    let lower = name.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|(_, color)| *color)
}

// ============================================================================
// Color specification
// ============================================================================

/// Color specification - a palette name, an RGB triple or a gray level.
///
/// Used both by the configuration file and by every API call that takes a
/// color, through the `From` conversions below.
///
/// # Examples
/// ```toml
/// fill = "orange"
/// stroke = [255, 128, 0]
/// background = 51
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Gray level 0-255 applied to all three channels
    Gray(u8),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
    /// Palette name (case-insensitive, closest match accepted)
    Name(String),
}

impl ColorSpec {
    /// Resolves the specification to a concrete [`Color`].
    ///
    /// Unknown names resolve to the closest palette name with a warning. When
    /// nothing in the palette is close enough, returns [`SketchError::UnknownColor`].
    pub fn resolve(&self) -> Result<Color, SketchError> {
        match self {
            ColorSpec::Gray(level) => Ok(Color::gray8(*level)),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb8(*r, *g, *b)),
            ColorSpec::Name(name) => {
                if let Some(color) = name_to_color(name) {
                    return Ok(color);
                }
                let lower = name.to_lowercase();
                let close = util::closest_match(
                    &lower,
                    NAMED_COLORS.iter().map(|(n, _)| *n),
                    CLOSE_MATCH_CUTOFF,
                )
                .ok_or_else(|| SketchError::UnknownColor(name.clone()))?;
                warn!(
                    "{} is not a valid color name, using closest match {} instead",
                    name, close
                );
                name_to_color(close).ok_or_else(|| SketchError::UnknownColor(name.clone()))
            }
        }
    }
}

impl From<u8> for ColorSpec {
    fn from(level: u8) -> Self {
        ColorSpec::Gray(level)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb([r, g, b])
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from(rgb: [u8; 3]) -> Self {
        ColorSpec::Rgb(rgb)
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Name(name)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.to_rgb8();
        ColorSpec::Rgb([r, g, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::from(51).resolve().unwrap(), Color::gray8(51));
        assert_eq!(
            ColorSpec::from((255, 55, 155)).resolve().unwrap(),
            Color::rgb8(255, 55, 155)
        );
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(ColorSpec::from("ORANGE").resolve().unwrap(), ORANGE);
        assert_eq!(ColorSpec::from("White").resolve().unwrap(), WHITE);
    }

    #[test]
    fn misspelled_name_uses_closest_match() {
        assert_eq!(ColorSpec::from("gren").resolve().unwrap(), GREEN);
        assert_eq!(ColorSpec::from("oragne").resolve().unwrap(), ORANGE);
    }

    #[test]
    fn unrelated_name_is_an_error() {
        let err = ColorSpec::from("zzzzzzzz").resolve().unwrap_err();
        assert!(matches!(err, SketchError::UnknownColor(name) if name == "zzzzzzzz"));
    }

    #[test]
    fn rgb8_round_trips_through_spec() {
        let color = Color::rgb8(12, 200, 99);
        assert_eq!(color.to_rgb8(), (12, 200, 99));
        assert_eq!(ColorSpec::from(color), ColorSpec::Rgb([12, 200, 99]));
    }

    #[test]
    fn contrasting_picks_black_on_light() {
        assert_eq!(WHITE.contrasting(), BLACK);
        assert_eq!(DARK_GRAY.contrasting(), WHITE);
    }

    #[test]
    fn untagged_spec_deserializes_all_forms() {
        #[derive(Deserialize)]
        struct Holder {
            a: ColorSpec,
            b: ColorSpec,
            c: ColorSpec,
        }
        let holder: Holder = toml::from_str("a = 51\nb = [1, 2, 3]\nc = \"red\"").unwrap();
        assert_eq!(holder.a, ColorSpec::Gray(51));
        assert_eq!(holder.b, ColorSpec::Rgb([1, 2, 3]));
        assert_eq!(holder.c, ColorSpec::Name("red".to_string()));
    }
}
