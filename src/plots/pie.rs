//! Pie chart with inline percentage labels.
//!
//! Slices start at twelve o'clock and proceed counter-clockwise in data
//! order, colored from the theme palette. Percentages render inside each
//! slice and names outside, so no legend box is needed.

use std::f64::consts::TAU;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, IntoDrawingArea, IntoFont, Polygon, SVGBackend, Text};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::Color;
use tracing::debug;

use super::{backend_color, ensure_dimensions, render_error, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::stats::ensure_finite;
use crate::theme::Theme;

/// Slices below this share of the total get no inline percentage.
const MIN_LABEL_SHARE: f64 = 0.04;

/// Builder for creating pie charts.
#[derive(Debug, Clone)]
pub struct PieChart {
    labels: Vec<String>,
    values: Vec<f64>,
    title: String,
    theme: Theme,
    width: u32,
    height: u32,
    show_percentages: bool,
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new()
    }
}

impl PieChart {
    /// Create a new pie chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
            title: String::new(),
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_percentages: true,
        }
    }

    /// Set the slice labels and values.
    #[must_use]
    pub fn data<S: AsRef<str>>(mut self, labels: &[S], values: &[f64]) -> Self {
        self.labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self.values = values.to_vec();
        self
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Show or hide inline percentage labels.
    #[must_use]
    pub fn percentages(mut self, show: bool) -> Self {
        self.show_percentages = show;
        self
    }

    /// Get the number of slices.
    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.values.len()
    }

    /// Build and validate the pie chart.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no data, labels and values differ in
    /// length, any value is non-finite or negative, all values are zero,
    /// or the dimensions are zero.
    pub fn build(self) -> Result<Self> {
        ensure_dimensions(self.width, self.height)?;
        if self.values.is_empty() {
            return Err(Error::EmptyData);
        }
        if self.labels.len() != self.values.len() {
            return Err(Error::DataLengthMismatch {
                x_len: self.labels.len(),
                y_len: self.values.len(),
            });
        }
        ensure_finite("pie values", &self.values)?;
        for (index, &value) in self.values.iter().enumerate() {
            if value < 0.0 {
                return Err(Error::NegativeValue {
                    context: "pie values",
                    index,
                });
            }
        }
        if self.values.iter().sum::<f64>() < f64::MIN_POSITIVE {
            return Err(Error::DegenerateSample {
                context: "pie chart values sum to zero",
            });
        }
        Ok(self)
    }

    /// Render to an SVG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let root = SVGBackend::new(path.as_ref(), (self.width, self.height)).into_drawing_area();
        self.draw_on(&root)?;
        root.present().map_err(render_error)
    }

    /// Render to an SVG document in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            self.draw_on(&root)?;
            root.present().map_err(render_error)?;
        }
        Ok(svg)
    }

    fn draw_on(&self, root: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<()> {
        debug!(
            slices = self.values.len(),
            width = self.width,
            height = self.height,
            "rendering pie chart"
        );

        let theme = &self.theme;
        root.fill(&backend_color(theme.background))
            .map_err(render_error)?;

        let text = backend_color(theme.text_color);
        let family = theme.font_family.as_str();
        let title_font = (family, theme.title_font_size as i32).into_font().color(&text);
        let label_font = (family, theme.label_font_size as i32)
            .into_font()
            .color(&text)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let area = if self.title.is_empty() {
            root.clone()
        } else {
            root.titled(&self.title, title_font).map_err(render_error)?
        };
        let area = area.margin(theme.margin, theme.margin, theme.margin, theme.margin);

        let (w, h) = area.dim_in_pixel();
        let cx = f64::from(w) / 2.0;
        let cy = f64::from(h) / 2.0;
        // Leave headroom for the outside name labels.
        let radius = 0.38 * f64::from(w.min(h));

        let total: f64 = self.values.iter().sum();
        let mut start = 0.0_f64;
        for (index, (name, &value)) in self.labels.iter().zip(&self.values).enumerate() {
            let share = value / total;
            let end = start + share;
            let color = self.theme.series_color(index);
            self.draw_slice(&area, (cx, cy), radius, start, end, color)?;

            let mid = (start + end) / 2.0 * TAU;
            if self.show_percentages && share >= MIN_LABEL_SHARE {
                let ink = if color.luminance() < 0.5 {
                    backend_color(Rgba::WHITE)
                } else {
                    text
                };
                let style = (family, theme.label_font_size as i32)
                    .into_font()
                    .color(&ink)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                let px = (cx - 0.62 * radius * mid.sin()) as i32;
                let py = (cy - 0.62 * radius * mid.cos()) as i32;
                area.draw(&Text::new(format!("{:.1}%", share * 100.0), (px, py), style))
                    .map_err(render_error)?;
            }
            if !name.is_empty() && share > 0.0 {
                let px = (cx - 1.15 * radius * mid.sin()) as i32;
                let py = (cy - 1.15 * radius * mid.cos()) as i32;
                area.draw(&Text::new(name.clone(), (px, py), label_font.clone()))
                    .map_err(render_error)?;
            }
            start = end;
        }

        Ok(())
    }

    fn draw_slice(
        &self,
        area: &DrawingArea<SVGBackend<'_>, Shift>,
        (cx, cy): (f64, f64),
        radius: f64,
        start: f64,
        end: f64,
        color: Rgba,
    ) -> Result<()> {
        if end <= start {
            return Ok(());
        }
        // Arc sampled at roughly one-degree steps.
        let steps = ((end - start) * 360.0).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push((cx as i32, cy as i32));
        for s in 0..=steps {
            let frac = start + (end - start) * (s as f64 / steps as f64);
            let theta = frac * TAU;
            points.push((
                (cx - radius * theta.sin()) as i32,
                (cy - radius * theta.cos()) as i32,
            ));
        }
        area.draw(&Polygon::new(points, backend_color(color).filled()))
            .map_err(render_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_builder() {
        let pie = PieChart::new()
            .data(&["a", "b", "c"], &[1.0, 2.0, 3.0])
            .build()
            .unwrap();
        assert_eq!(pie.slice_count(), 3);
    }

    #[test]
    fn test_pie_empty() {
        assert!(matches!(PieChart::new().build(), Err(Error::EmptyData)));
    }

    #[test]
    fn test_pie_label_mismatch() {
        let err = PieChart::new()
            .data(&["a", "b"], &[1.0, 2.0, 3.0])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DataLengthMismatch { x_len: 2, y_len: 3 }
        ));
    }

    #[test]
    fn test_pie_negative_value() {
        let err = PieChart::new()
            .data(&["a", "b"], &[1.0, -2.0])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeValue {
                context: "pie values",
                index: 1
            }
        ));
    }

    #[test]
    fn test_pie_non_finite() {
        let err = PieChart::new()
            .data(&["a", "b"], &[1.0, f64::NAN])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::NonFinite { .. }));
    }

    #[test]
    fn test_pie_zero_sum() {
        let err = PieChart::new()
            .data(&["a", "b"], &[0.0, 0.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateSample { .. }));
    }

    #[test]
    fn test_pie_svg_percentages() {
        let svg = PieChart::new()
            .data(&["q1", "q2", "q3", "q4"], &[1.0, 1.0, 1.0, 1.0])
            .dimensions(400, 400)
            .build()
            .unwrap()
            .to_svg_string()
            .unwrap();
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("25.0%"));
        assert!(svg.contains("q3"));
    }

    #[test]
    fn test_pie_percentages_disabled() {
        let svg = PieChart::new()
            .data(&["a", "b"], &[3.0, 1.0])
            .percentages(false)
            .dimensions(400, 400)
            .build()
            .unwrap()
            .to_svg_string()
            .unwrap();
        assert!(!svg.contains('%'));
    }

    #[test]
    fn test_pie_single_slice() {
        let svg = PieChart::new()
            .data(&["all"], &[5.0])
            .dimensions(300, 300)
            .build()
            .unwrap()
            .to_svg_string()
            .unwrap();
        assert!(svg.contains("100.0%"));
    }

    #[test]
    fn test_pie_zero_share_slice_skipped() {
        let svg = PieChart::new()
            .data(&["big", "ghost-slice"], &[4.0, 0.0])
            .dimensions(300, 300)
            .build()
            .unwrap()
            .to_svg_string()
            .unwrap();
        assert!(svg.contains("100.0%"));
        assert!(!svg.contains("ghost-slice"));
    }

    #[test]
    fn test_pie_with_title() {
        let svg = PieChart::new()
            .data(&["a", "b"], &[1.0, 1.0])
            .title("Share of requests")
            .dimensions(400, 400)
            .build()
            .unwrap()
            .to_svg_string()
            .unwrap();
        assert!(svg.contains("Share of requests"));
    }
}
