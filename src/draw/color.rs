//! RGBA color type, predefined color constants and color parsing.

use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use shapeboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let picked: Color = "#ff8000".parse().unwrap();
/// assert_eq!(picked.r, 1.0);
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

/// Errors produced when a color string cannot be turned into a paintable [`Color`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("invalid hex color '{0}': expected #rgb or #rrggbb")]
    InvalidHex(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl Color {
    /// Creates an opaque color from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rgb` or `#rrggbb`, the format produced by an HTML color input.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidHex(value.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(value.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHex(value.to_string()))
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
                Ok(Self::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorParseError::InvalidHex(value.to_string())),
        }
    }

    /// Formats the color as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts a hex value (`#3366ff`) or one of the names known to
    /// [`crate::util::name_to_color`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        crate::util::name_to_color(trimmed)
            .ok_or_else(|| ColorParseError::UnknownName(trimmed.to_string()))
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Light green, matching the CSS `lightgreen` keyword (#90ee90)
pub const LIGHT_GREEN: Color = Color {
    r: 144.0 / 255.0,
    g: 238.0 / 255.0,
    b: 144.0 / 255.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color, used as the cleared canvas background
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), RED);
        assert_eq!(Color::from_hex("#0f0").unwrap(), GREEN);
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), WHITE);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(
            Color::from_hex("ff0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::from_hex("#ff00"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn from_str_accepts_names_and_hex() {
        assert_eq!("blue".parse::<Color>().unwrap(), BLUE);
        assert_eq!("#ffff00".parse::<Color>().unwrap(), YELLOW);
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert_eq!(
            "mauve".parse::<Color>(),
            Err(ColorParseError::UnknownName("mauve".to_string()))
        );
    }

    #[test]
    fn hex_formatting_matches_input() {
        assert_eq!(Color::from_hex("#3366ff").unwrap().to_hex(), "#3366ff");
        assert_eq!(LIGHT_GREEN.to_hex(), "#90ee90");
    }
}
