//! Bar chart for categorical data, with grouped and horizontal layouts.
//!
//! Each category owns a unit-wide slot on the category axis; the bars of
//! all groups share 80% of that slot. Vertical charts rotate category
//! labels once there are more than five of them.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, Color, DrawingArea, FontTransform, IntoDrawingArea, IntoFont, Rectangle,
    SVGBackend, SeriesLabelPosition, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use super::{
    backend_color, ensure_dimensions, extent, padded_range, render_error, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use crate::color::Rgba;
use crate::data::DataFrame;
use crate::error::{Error, Result};
use crate::stats::ensure_finite;
use crate::theme::Theme;

/// Fraction of each category slot covered by bars.
const BAR_BAND: f64 = 0.8;

/// Categories beyond this rotate their labels to keep them readable.
const ROTATE_THRESHOLD: usize = 5;

/// A named group of bar values, one value per category.
#[derive(Debug, Clone)]
pub struct BarGroup {
    /// Group name shown in the legend; empty hides the legend entry.
    pub name: String,
    /// One value per category.
    pub values: Vec<f64>,
    /// Explicit color; the theme palette assigns one when `None`.
    pub color: Option<Rgba>,
}

impl BarGroup {
    /// Create a new bar group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            color: None,
        }
    }

    /// Set the values, one per category.
    #[must_use]
    pub fn values(mut self, values: &[f64]) -> Self {
        self.values = values.to_vec();
        self
    }

    /// Set an explicit color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}

/// Builder for creating bar charts.
#[derive(Debug, Clone)]
pub struct BarChart {
    categories: Vec<String>,
    groups: Vec<BarGroup>,
    title: String,
    y_label: String,
    horizontal: bool,
    theme: Theme,
    width: u32,
    height: u32,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    /// Create a new bar chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            groups: Vec::new(),
            title: String::new(),
            y_label: String::new(),
            horizontal: false,
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Create a bar chart from a text column of categories and a numeric
    /// column of values. The y axis takes its label from the value column.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has the wrong type.
    pub fn from_frame(frame: &DataFrame, categories: &str, values: &str) -> Result<Self> {
        let names = frame.text_column(categories)?;
        let heights = frame.numeric_column(values)?;
        Ok(Self::new().data(&names, &heights).y_label(values))
    }

    /// Set categories and a single unnamed group (convenience method).
    #[must_use]
    pub fn data<S: AsRef<str>>(self, categories: &[S], values: &[f64]) -> Self {
        self.categories(categories)
            .add_group(BarGroup::new("").values(values))
    }

    /// Set the category labels.
    #[must_use]
    pub fn categories<S: AsRef<str>>(mut self, categories: &[S]) -> Self {
        self.categories = categories.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Add a group of bars.
    #[must_use]
    pub fn add_group(mut self, group: BarGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the value-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Lay the bars out horizontally, with categories on the y axis.
    #[must_use]
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
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

    /// Get the number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Get the number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Build and validate the bar chart.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no categories or groups, a group's
    /// length does not match the categories, the values are non-finite,
    /// or the dimensions are zero.
    pub fn build(self) -> Result<Self> {
        ensure_dimensions(self.width, self.height)?;
        if self.categories.is_empty() || self.groups.is_empty() {
            return Err(Error::EmptyData);
        }
        for group in &self.groups {
            if group.values.len() != self.categories.len() {
                return Err(Error::DataLengthMismatch {
                    x_len: self.categories.len(),
                    y_len: group.values.len(),
                });
            }
            ensure_finite("bar values", &group.values)?;
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
            categories = self.categories.len(),
            groups = self.groups.len(),
            width = self.width,
            height = self.height,
            "rendering bar chart"
        );

        let theme = &self.theme;
        root.fill(&backend_color(theme.background))
            .map_err(render_error)?;

        let (v_lo, v_hi) = extent(self.groups.iter().flat_map(|g| g.values.iter().copied()));
        // Bars grow from zero, so the value axis must include it.
        let v_range = padded_range(v_lo.min(0.0), v_hi.max(0.0));
        let v_base = v_range.start;
        let slot_count = self.categories.len() as f64;

        let text = backend_color(theme.text_color);
        let family = theme.font_family.as_str();
        let title_font = (family, theme.title_font_size as i32).into_font().color(&text);
        let label_font = (family, theme.label_font_size as i32).into_font().color(&text);
        let tick_font = (family, theme.tick_font_size as i32).into_font().color(&text);

        let rotate = !self.horizontal && self.categories.len() > ROTATE_THRESHOLD;
        let x_label_area: i32 = if rotate { 72 } else { 32 };
        let y_label_area: i32 = if self.horizontal { 80 } else { 56 };

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(theme.margin)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area);
        if !self.title.is_empty() {
            builder.caption(&self.title, title_font);
        }
        let mut chart = if self.horizontal {
            builder.build_cartesian_2d(v_range, 0.0..slot_count)
        } else {
            builder.build_cartesian_2d(0.0..slot_count, v_range)
        }
        .map_err(render_error)?;

        let grid = backend_color(theme.grid_color);
        let axis = if theme.show_axis {
            backend_color(theme.axis_color)
        } else {
            backend_color(Rgba::TRANSPARENT)
        };
        // The formatter is stored by reference, so it must outlive the mesh.
        let hide_labels = |_: &f64| String::new();
        let mut mesh = chart.configure_mesh();
        if self.horizontal {
            mesh.disable_y_mesh()
                .y_label_formatter(&hide_labels)
                .x_desc(self.y_label.as_str());
        } else {
            mesh.disable_x_mesh()
                .x_label_formatter(&hide_labels)
                .y_desc(self.y_label.as_str());
        }
        mesh.axis_style(&axis)
            .bold_line_style(grid.stroke_width(theme.grid_width as u32))
            .light_line_style(&grid.mix(0.4))
            .label_style(tick_font.clone());
        if !theme.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;

        let bar_width = BAR_BAND / self.groups.len() as f64;
        for (g, group) in self.groups.iter().enumerate() {
            let color = group.color.unwrap_or(theme.series_color(g));
            let fill = backend_color(color).filled();
            let offset = (1.0 - BAR_BAND) / 2.0 + g as f64 * bar_width;
            let anno = chart
                .draw_series(group.values.iter().enumerate().map(|(i, &v)| {
                    let a0 = i as f64 + offset;
                    let a1 = a0 + bar_width;
                    if self.horizontal {
                        Rectangle::new([(v.min(0.0), a1), (v.max(0.0), a0)], fill)
                    } else {
                        Rectangle::new([(a0, v.max(0.0)), (a1, v.min(0.0))], fill)
                    }
                }))
                .map_err(render_error)?;
            if !group.name.is_empty() {
                anno.label(group.name.as_str()).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 12, y + 6)], fill)
                });
            }
        }

        // Category labels are placed by hand beside each slot.
        let anchor = if self.horizontal {
            Pos::new(HPos::Right, VPos::Center)
        } else if rotate {
            Pos::new(HPos::Left, VPos::Center)
        } else {
            Pos::new(HPos::Center, VPos::Top)
        };
        let mut category_font = tick_font.pos(anchor);
        if rotate {
            category_font = category_font.transform(FontTransform::Rotate90);
        }
        for (i, name) in self.categories.iter().enumerate() {
            let slot = i as f64 + 0.5;
            let (px, py) = if self.horizontal {
                let (px, py) = chart.backend_coord(&(v_base, slot));
                (px - 6, py)
            } else {
                let (px, py) = chart.backend_coord(&(slot, v_base));
                (px, py + 6)
            };
            root.draw(&Text::new(name.clone(), (px, py), category_font.clone()))
                .map_err(render_error)?;
        }

        if self.groups.iter().any(|g| !g.name.is_empty()) {
            let panel = backend_color(theme.panel_background).mix(0.9);
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(&panel)
                .border_style(&grid)
                .label_font(label_font)
                .draw()
                .map_err(render_error)?;
        }

        Ok(())
    }
}
