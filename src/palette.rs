//! House corporate palette.
//!
//! Named brand colors and the ordered palettes built from them. Every chart
//! defaults to [`Palette::Primary`] for series colors; heatmaps sample the
//! gradient palettes. Selection is deterministic: requesting more colors than
//! a palette holds cycles from the start.

use crate::color::Rgba;

/// Primary brand green.
pub const HOUSE_GREEN: Rgba = Rgba::rgb(0x21, 0xA0, 0x38);
/// Darker green for emphasis and gradient ends.
pub const HOUSE_DARK_GREEN: Rgba = Rgba::rgb(0x16, 0x8A, 0x2C);
/// Lighter green for fills and secondary series.
pub const HOUSE_LIGHT_GREEN: Rgba = Rgba::rgb(0x3B, 0xB5, 0x4A);
/// Accent orange.
pub const HOUSE_ORANGE: Rgba = Rgba::rgb(0xFF, 0x6B, 0x00);
/// Accent blue.
pub const HOUSE_BLUE: Rgba = Rgba::rgb(0x0E, 0x67, 0xD7);
/// Accent purple.
pub const HOUSE_PURPLE: Rgba = Rgba::rgb(0x7B, 0x4E, 0xA5);
/// Alert red.
pub const HOUSE_RED: Rgba = Rgba::rgb(0xE3, 0x1E, 0x24);
/// Accent yellow.
pub const HOUSE_YELLOW: Rgba = Rgba::rgb(0xFF, 0xB8, 0x00);
/// Near-black text gray.
pub const HOUSE_DARK_GRAY: Rgba = Rgba::rgb(0x33, 0x33, 0x33);
/// Mid gray for secondary text.
pub const HOUSE_GRAY: Rgba = Rgba::rgb(0x70, 0x70, 0x70);
/// Light gray for inactive elements.
pub const HOUSE_LIGHT_GRAY: Rgba = Rgba::rgb(0xB8, 0xB8, 0xB8);
/// Lightest gray for grid lines and separators.
pub const HOUSE_LIGHTER_GRAY: Rgba = Rgba::rgb(0xE6, 0xE6, 0xE6);

const PRIMARY: [Rgba; 6] = [
    HOUSE_GREEN,
    HOUSE_BLUE,
    HOUSE_ORANGE,
    HOUSE_PURPLE,
    HOUSE_YELLOW,
    HOUSE_RED,
];

const SEQUENTIAL_GREEN: [Rgba; 6] = [
    Rgba::rgb(0xE8, 0xF5, 0xE9),
    Rgba::rgb(0xA5, 0xD6, 0xA7),
    Rgba::rgb(0x66, 0xBB, 0x6A),
    Rgba::rgb(0x43, 0xA0, 0x47),
    Rgba::rgb(0x2E, 0x7D, 0x32),
    Rgba::rgb(0x1B, 0x5E, 0x20),
];

const DIVERGING: [Rgba; 7] = [
    HOUSE_RED,
    HOUSE_ORANGE,
    HOUSE_YELLOW,
    HOUSE_LIGHTER_GRAY,
    HOUSE_LIGHT_GREEN,
    HOUSE_GREEN,
    HOUSE_DARK_GREEN,
];

const GRADIENT_GREEN: [Rgba; 3] = [Rgba::rgb(0xE8, 0xF5, 0xE9), HOUSE_GREEN, HOUSE_DARK_GREEN];

const GRADIENT_BLUE: [Rgba; 3] = [
    Rgba::rgb(0xE3, 0xF2, 0xFD),
    HOUSE_BLUE,
    Rgba::rgb(0x0D, 0x47, 0xA1),
];

const GRADIENT_WARM: [Rgba; 3] = [Rgba::rgb(0xFF, 0xE0, 0xB2), HOUSE_ORANGE, HOUSE_RED];

/// A named, ordered set of house colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Palette {
    /// Categorical series colors: green, blue, orange, purple, yellow, red.
    #[default]
    Primary,
    /// Light-to-dark greens for sequential data.
    SequentialGreen,
    /// Red-through-gray-to-green for signed data.
    Diverging,
    /// Three-stop green gradient for continuous colormaps.
    GradientGreen,
    /// Three-stop blue gradient for continuous colormaps.
    GradientBlue,
    /// Three-stop warm gradient for continuous colormaps.
    GradientWarm,
}

impl Palette {
    /// The palette's colors in order.
    #[must_use]
    pub const fn colors(self) -> &'static [Rgba] {
        match self {
            Self::Primary => &PRIMARY,
            Self::SequentialGreen => &SEQUENTIAL_GREEN,
            Self::Diverging => &DIVERGING,
            Self::GradientGreen => &GRADIENT_GREEN,
            Self::GradientBlue => &GRADIENT_BLUE,
            Self::GradientWarm => &GRADIENT_WARM,
        }
    }

    /// Number of distinct colors in the palette.
    #[must_use]
    pub const fn color_count(self) -> usize {
        self.colors().len()
    }

    /// The color at `index`, cycling past the end of the palette.
    #[must_use]
    pub fn color_at(self, index: usize) -> Rgba {
        let colors = self.colors();
        colors[index % colors.len()]
    }

    /// The first `n` colors, cycling when `n` exceeds the palette length.
    #[must_use]
    pub fn take(self, n: usize) -> Vec<Rgba> {
        self.colors().iter().copied().cycle().take(n).collect()
    }

    /// Sample the palette as a continuous gradient at `t` in [0, 1].
    #[must_use]
    pub fn sample(self, t: f64) -> Rgba {
        Rgba::gradient(self.colors(), t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_brand_hex() {
        assert_eq!(HOUSE_GREEN, Rgba::from_hex("#21A038").unwrap());
        assert_eq!(HOUSE_DARK_GREEN, Rgba::from_hex("#168A2C").unwrap());
        assert_eq!(HOUSE_ORANGE, Rgba::from_hex("#FF6B00").unwrap());
        assert_eq!(HOUSE_BLUE, Rgba::from_hex("#0E67D7").unwrap());
        assert_eq!(HOUSE_RED, Rgba::from_hex("#E31E24").unwrap());
    }

    #[test]
    fn test_primary_order_starts_with_green() {
        let colors = Palette::Primary.colors();
        assert_eq!(colors[0], HOUSE_GREEN);
        assert_eq!(colors[1], HOUSE_BLUE);
        assert_eq!(colors[2], HOUSE_ORANGE);
    }

    #[test]
    fn test_default_palette_is_primary() {
        assert_eq!(Palette::default(), Palette::Primary);
    }

    #[test]
    fn test_take_truncates() {
        let colors = Palette::Primary.take(3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[2], HOUSE_ORANGE);
    }

    #[test]
    fn test_take_cycles_past_length() {
        let colors = Palette::Primary.take(8);
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[6], HOUSE_GREEN);
        assert_eq!(colors[7], HOUSE_BLUE);
    }

    #[test]
    fn test_color_at_wraps() {
        assert_eq!(Palette::Primary.color_at(0), Palette::Primary.color_at(6));
        assert_eq!(Palette::Primary.color_at(1), Palette::Primary.color_at(7));
    }

    #[test]
    fn test_color_count() {
        assert_eq!(Palette::Primary.color_count(), 6);
        assert_eq!(Palette::Diverging.color_count(), 7);
        assert_eq!(Palette::GradientGreen.color_count(), 3);
    }

    #[test]
    fn test_gradient_sample_endpoints() {
        assert_eq!(
            Palette::GradientGreen.sample(0.0),
            Rgba::from_hex("#E8F5E9").unwrap()
        );
        assert_eq!(Palette::GradientGreen.sample(1.0), HOUSE_DARK_GREEN);
    }

    #[test]
    fn test_diverging_center_is_neutral() {
        assert_eq!(Palette::Diverging.colors()[3], HOUSE_LIGHTER_GRAY);
    }
}
