use std::str::FromStr;

use palette::{Srgb, Srgba, WithAlpha};

/// Error returned when a color string is not a hex code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError(pub String);

/// 8-bit sRGB color with straight alpha.
///
/// Colors compare by exact channel equality, which is how the renderer decides
/// whether a text-color change needs a segment split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse `#rrggbb`, `#rgb`, `#rrggbbaa` or `#rgba` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        let parsed = match digits.len() {
            4 | 8 => Srgba::<u8>::from_str(digits).ok(),
            3 | 6 => Srgb::<u8>::from_str(digits).ok().map(|rgb| rgb.with_alpha(255)),
            _ => None,
        };
        parsed
            .map(Self::from)
            .ok_or_else(|| ColorParseError(hex.to_owned()))
    }

    /// Parse an optional configuration value.
    pub fn from_setting(value: Option<&str>) -> Result<Option<Self>, ColorParseError> {
        value.map(Self::from_hex).transpose()
    }
}

impl From<Srgba<u8>> for Color {
    fn from(c: Srgba<u8>) -> Self {
        Self::rgba(c.red, c.green, c.blue, c.alpha)
    }
}

impl From<Color> for Srgba<u8> {
    fn from(c: Color) -> Self {
        Srgba::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#3390ff"), Ok(Color::rgb(0x33, 0x90, 0xff)));
        assert_eq!(Color::from_hex("ffff00"), Ok(Color::rgb(255, 255, 0)));
    }

    #[test]
    fn parses_alpha_hex() {
        assert_eq!(
            Color::from_hex("#3390ff80"),
            Ok(Color::rgba(0x33, 0x90, 0xff, 0x80))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("blue").is_err());
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn optional_settings() {
        assert_eq!(Color::from_setting(None), Ok(None));
        assert_eq!(Color::from_setting(Some("#000")), Ok(Some(Color::BLACK)));
    }
}
