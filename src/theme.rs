//! Chart themes.
//!
//! Controls the non-data visual appearance of every chart wrapper. The
//! default is the corporate house style: off-white canvas, dark gray text,
//! light grid, Arial, and the primary brand palette for series colors.

use crate::color::Rgba;
use crate::palette::{Palette, HOUSE_DARK_GRAY, HOUSE_GRAY, HOUSE_LIGHTER_GRAY};

/// Visual styling applied to every chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Canvas background color.
    pub background: Rgba,
    /// Plot panel background color.
    pub panel_background: Rgba,
    /// Grid line color.
    pub grid_color: Rgba,
    /// Axis line and tick color.
    pub axis_color: Rgba,
    /// Primary text color (titles, axis labels).
    pub text_color: Rgba,
    /// Secondary text color (tick labels, annotations).
    pub muted_text_color: Rgba,
    /// Palette used for series colors, in order.
    pub series_palette: Palette,
    /// Font family for all chart text.
    pub font_family: String,
    /// Title font size in points.
    pub title_font_size: u32,
    /// Axis label font size in points.
    pub label_font_size: u32,
    /// Tick label font size in points.
    pub tick_font_size: u32,
    /// Show grid lines.
    pub show_grid: bool,
    /// Show axis lines.
    pub show_axis: bool,
    /// Grid line width.
    pub grid_width: f32,
    /// Margin around the plot in pixels.
    pub margin: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::house()
    }
}

impl Theme {
    /// The corporate house theme (the default).
    #[must_use]
    pub fn house() -> Self {
        Self {
            background: Rgba::rgb(252, 252, 249),
            panel_background: Rgba::rgb(252, 252, 249),
            grid_color: Rgba::rgb(220, 220, 220),
            axis_color: HOUSE_DARK_GRAY,
            text_color: HOUSE_DARK_GRAY,
            muted_text_color: HOUSE_GRAY,
            series_palette: Palette::Primary,
            font_family: "Arial".to_string(),
            title_font_size: 16,
            label_font_size: 12,
            tick_font_size: 11,
            show_grid: true,
            show_axis: true,
            grid_width: 1.0,
            margin: 10,
        }
    }

    /// Minimal theme: white canvas, faint chrome, house palette.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            background: Rgba::WHITE,
            panel_background: Rgba::WHITE,
            grid_color: HOUSE_LIGHTER_GRAY,
            axis_color: HOUSE_GRAY,
            text_color: HOUSE_DARK_GRAY,
            muted_text_color: HOUSE_GRAY,
            series_palette: Palette::Primary,
            font_family: "Arial".to_string(),
            title_font_size: 16,
            label_font_size: 12,
            tick_font_size: 11,
            show_grid: true,
            show_axis: true,
            grid_width: 0.5,
            margin: 10,
        }
    }

    /// Dark theme for slides and dashboards.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(30, 30, 30),
            panel_background: Rgba::rgb(40, 40, 40),
            grid_color: Rgba::rgb(60, 60, 60),
            axis_color: Rgba::rgb(180, 180, 180),
            text_color: Rgba::rgb(220, 220, 220),
            muted_text_color: Rgba::rgb(140, 140, 140),
            series_palette: Palette::Primary,
            font_family: "Arial".to_string(),
            title_font_size: 16,
            label_font_size: 12,
            tick_font_size: 11,
            show_grid: true,
            show_axis: true,
            grid_width: 0.5,
            margin: 10,
        }
    }

    /// Set canvas background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set plot panel background color.
    #[must_use]
    pub fn panel_background(mut self, color: Rgba) -> Self {
        self.panel_background = color;
        self
    }

    /// Set grid color.
    #[must_use]
    pub fn grid_color(mut self, color: Rgba) -> Self {
        self.grid_color = color;
        self
    }

    /// Set primary text color.
    #[must_use]
    pub fn text_color(mut self, color: Rgba) -> Self {
        self.text_color = color;
        self
    }

    /// Set the palette used for series colors.
    #[must_use]
    pub fn series_palette(mut self, palette: Palette) -> Self {
        self.series_palette = palette;
        self
    }

    /// Set the font family.
    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set margin.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Enable or disable grid lines.
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Enable or disable axis lines.
    #[must_use]
    pub fn axis(mut self, show: bool) -> Self {
        self.show_axis = show;
        self
    }

    /// The series color at `index`, cycling through the theme palette.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Rgba {
        self.series_palette.color_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{HOUSE_BLUE, HOUSE_GREEN};

    #[test]
    fn test_theme_house() {
        let t = Theme::house();
        assert_eq!(t.background, Rgba::rgb(252, 252, 249));
        assert_eq!(t.text_color, HOUSE_DARK_GRAY);
        assert_eq!(t.font_family, "Arial");
        assert!(t.show_grid);
    }

    #[test]
    fn test_theme_default_is_house() {
        assert_eq!(Theme::default(), Theme::house());
    }

    #[test]
    fn test_theme_dark() {
        let t = Theme::dark();
        assert_eq!(t.background.r, 30);
    }

    #[test]
    fn test_theme_customization() {
        let t = Theme::minimal()
            .background(Rgba::rgb(250, 250, 250))
            .margin(50)
            .grid(false);

        assert_eq!(t.margin, 50);
        assert!(!t.show_grid);
    }

    #[test]
    fn test_theme_series_colors_cycle() {
        let t = Theme::house();
        assert_eq!(t.series_color(0), HOUSE_GREEN);
        assert_eq!(t.series_color(1), HOUSE_BLUE);
        assert_eq!(t.series_color(6), HOUSE_GREEN);
    }

    #[test]
    fn test_theme_palette_override() {
        let t = Theme::house().series_palette(Palette::SequentialGreen);
        assert_eq!(t.series_color(0), Palette::SequentialGreen.color_at(0));
    }

    #[test]
    fn test_theme_font_family_override() {
        let t = Theme::house().font_family("Helvetica");
        assert_eq!(t.font_family, "Helvetica");
    }

    #[test]
    fn test_theme_axis_toggle() {
        let t = Theme::minimal().axis(false);
        assert!(!t.show_axis);
    }

    #[test]
    fn test_all_themes_valid() {
        for t in [Theme::house(), Theme::minimal(), Theme::dark()] {
            assert!(t.title_font_size >= t.label_font_size);
            assert!(t.grid_width >= 0.0);
            assert!(!t.font_family.is_empty());
        }
    }
}
