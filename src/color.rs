//! Color types and palette interpolation.
//!
//! Provides an 8-bit RGBA color with hex parsing, linear interpolation, and
//! multi-stop gradient sampling for heatmap colormaps. Color-science
//! transforms beyond sRGB arithmetic are out of scope.

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse a CSS-style hex color: `#RGB`, `#RRGGBB`, or `#RRGGBBAA`
    /// (leading `#` optional, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for unsupported lengths or
    /// non-hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        match digits.len() {
            3 => {
                // Shorthand: each digit doubled, e.g. #1A3 -> #11AA33
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(Error::InvalidColor(hex.to_string())),
        }
    }

    /// Format as an uppercase `#RRGGBB` hex string (alpha omitted when 255).
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Sample a piecewise-linear gradient through `stops` at position
    /// `t` in [0, 1] (clamped). Empty stop lists yield transparent.
    #[must_use]
    pub fn gradient(stops: &[Self], t: f64) -> Self {
        match stops {
            [] => Self::TRANSPARENT,
            [only] => *only,
            _ => {
                let t = t.clamp(0.0, 1.0);
                let scaled = t * (stops.len() - 1) as f64;
                let idx = (scaled.floor() as usize).min(stops.len() - 2);
                let frac = (scaled - idx as f64) as f32;
                stops[idx].lerp(stops[idx + 1], frac)
            }
        }
    }

    /// Approximate relative luminance in [0, 1], used to pick readable
    /// annotation text over colored cells.
    #[must_use]
    pub fn luminance(self) -> f32 {
        (0.2126 * f32::from(self.r) + 0.7152 * f32::from(self.g) + 0.0722 * f32::from(self.b))
            / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rgba_lerp() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        let mid = black.lerp(white, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_lerp_boundaries() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        let at_zero = black.lerp(white, 0.0);
        assert_eq!(at_zero, black);

        let at_one = black.lerp(white, 1.0);
        assert_eq!(at_one, white);

        // t clamped to [0, 1]
        let below = black.lerp(white, -0.5);
        assert_eq!(below, black);

        let above = black.lerp(white, 1.5);
        assert_eq!(above, white);
    }

    #[test]
    fn test_from_hex_full() {
        let c = Rgba::from_hex("#21A038").unwrap();
        assert_eq!(c, Rgba::rgb(0x21, 0xA0, 0x38));
    }

    #[test]
    fn test_from_hex_without_hash() {
        let c = Rgba::from_hex("ff6b00").unwrap();
        assert_eq!(c, Rgba::rgb(0xFF, 0x6B, 0x00));
    }

    #[test]
    fn test_from_hex_shorthand() {
        let c = Rgba::from_hex("#1A3").unwrap();
        assert_eq!(c, Rgba::rgb(0x11, 0xAA, 0x33));
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let c = Rgba::from_hex("#21A03880").unwrap();
        assert_eq!(c.a, 0x80);
    }

    #[test]
    fn test_from_hex_invalid_length() {
        assert!(Rgba::from_hex("#21A0").is_err());
        assert!(Rgba::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_invalid_digit() {
        assert!(Rgba::from_hex("#21G038").is_err());
    }

    #[test]
    fn test_from_hex_non_ascii() {
        assert!(Rgba::from_hex("#21A03\u{fe0f}").is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let c = Rgba::rgb(0x21, 0xA0, 0x38);
        assert_eq!(c.to_hex(), "#21A038");
        assert_eq!(Rgba::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_to_hex_with_alpha() {
        let c = Rgba::new(0x21, 0xA0, 0x38, 0x40);
        assert_eq!(c.to_hex(), "#21A03840");
    }

    #[test]
    fn test_rgba_with_alpha() {
        let c = Rgba::rgb(255, 0, 0).with_alpha(128);
        assert_eq!(c.r, 255);
        assert_eq!(c.a, 128);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        let restored = Rgba::from_array(arr);
        assert_eq!(restored, color);
    }

    #[test]
    fn test_rgba_default() {
        let color = Rgba::default();
        assert_eq!(color, Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_gradient_endpoints() {
        let stops = [Rgba::BLACK, Rgba::rgb(255, 0, 0), Rgba::WHITE];
        assert_eq!(Rgba::gradient(&stops, 0.0), Rgba::BLACK);
        assert_eq!(Rgba::gradient(&stops, 1.0), Rgba::WHITE);
    }

    #[test]
    fn test_gradient_midpoint_hits_middle_stop() {
        let stops = [Rgba::BLACK, Rgba::rgb(255, 0, 0), Rgba::WHITE];
        assert_eq!(Rgba::gradient(&stops, 0.5), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_gradient_clamps_t() {
        let stops = [Rgba::BLACK, Rgba::WHITE];
        assert_eq!(Rgba::gradient(&stops, -1.0), Rgba::BLACK);
        assert_eq!(Rgba::gradient(&stops, 2.0), Rgba::WHITE);
    }

    #[test]
    fn test_gradient_degenerate_stop_lists() {
        assert_eq!(Rgba::gradient(&[], 0.5), Rgba::TRANSPARENT);
        assert_eq!(Rgba::gradient(&[Rgba::WHITE], 0.5), Rgba::WHITE);
    }

    #[test]
    fn test_luminance_ordering() {
        assert!(Rgba::WHITE.luminance() > Rgba::rgb(127, 127, 127).luminance());
        assert!(Rgba::rgb(127, 127, 127).luminance() > Rgba::BLACK.luminance());
    }
}
