//! Annotated heatmap for 2D data matrices.
//!
//! Cells are colored by interpolating the active gradient palette over the
//! data range. Annotations switch between light and dark text based on the
//! luminance of the cell behind them.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, DrawingArea, IntoDrawingArea, IntoFont, Rectangle, SVGBackend, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::Color;
use tracing::debug;

use super::{backend_color, ensure_dimensions, extent, render_error, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::stats::ensure_finite;
use crate::theme::Theme;

/// Builder for creating heatmaps.
#[derive(Debug, Clone)]
pub struct Heatmap {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    palette: Palette,
    title: String,
    theme: Theme,
    width: u32,
    height: u32,
    annotate: bool,
}

impl Default for Heatmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heatmap {
    /// Create a new heatmap builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            rows: 0,
            cols: 0,
            row_labels: Vec::new(),
            col_labels: Vec::new(),
            palette: Palette::GradientGreen,
            title: String::new(),
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            annotate: true,
        }
    }

    /// Set the data matrix in row-major order.
    #[must_use]
    pub fn data(mut self, values: &[f64], rows: usize, cols: usize) -> Self {
        self.values = values.to_vec();
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the data from a slice of rows.
    #[must_use]
    pub fn data_2d(mut self, rows: &[Vec<f64>]) -> Self {
        if rows.is_empty() {
            return self;
        }
        self.rows = rows.len();
        self.cols = rows[0].len();
        self.values = rows.iter().flatten().copied().collect();
        self
    }

    /// Set the row labels, top to bottom.
    #[must_use]
    pub fn row_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.row_labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self
    }

    /// Set the column labels, left to right.
    #[must_use]
    pub fn col_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.col_labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self
    }

    /// Set the gradient palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
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

    /// Enable or disable value annotations.
    #[must_use]
    pub fn annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Get the number of rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    #[must_use]
    pub const fn col_count(&self) -> usize {
        self.cols
    }

    /// Build and validate the heatmap.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or non-finite, its length
    /// does not match `rows * cols`, labels do not match the matrix shape,
    /// or the dimensions are zero.
    pub fn build(self) -> Result<Self> {
        ensure_dimensions(self.width, self.height)?;
        if self.values.is_empty() {
            return Err(Error::EmptyData);
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidDimensions {
                width: self.cols as u32,
                height: self.rows as u32,
            });
        }
        if self.values.len() != self.rows * self.cols {
            return Err(Error::DataLengthMismatch {
                x_len: self.rows * self.cols,
                y_len: self.values.len(),
            });
        }
        if !self.row_labels.is_empty() && self.row_labels.len() != self.rows {
            return Err(Error::DataLengthMismatch {
                x_len: self.rows,
                y_len: self.row_labels.len(),
            });
        }
        if !self.col_labels.is_empty() && self.col_labels.len() != self.cols {
            return Err(Error::DataLengthMismatch {
                x_len: self.cols,
                y_len: self.col_labels.len(),
            });
        }
        ensure_finite("matrix values", &self.values)?;
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

    fn color_bounds(&self) -> (f64, f64) {
        let (min, max) = extent(self.values.iter().copied());
        if (max - min).abs() < f64::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        }
    }

    fn cell_color(&self, value: f64, min: f64, max: f64) -> Rgba {
        self.palette.sample((value - min) / (max - min))
    }

    fn draw_on(&self, root: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<()> {
        debug!(
            rows = self.rows,
            cols = self.cols,
            width = self.width,
            height = self.height,
            "rendering heatmap"
        );

        let theme = &self.theme;
        root.fill(&backend_color(theme.background))
            .map_err(render_error)?;

        let (min, max) = self.color_bounds();
        let text = backend_color(theme.text_color);
        let family = theme.font_family.as_str();
        let title_font = (family, theme.title_font_size as i32).into_font().color(&text);
        let tick_font = (family, theme.tick_font_size as i32).into_font().color(&text);

        let y_label_area: i32 = if self.row_labels.is_empty() { 40 } else { 80 };
        let mut builder = ChartBuilder::on(root);
        builder
            .margin(theme.margin)
            .x_label_area_size(32)
            .y_label_area_size(y_label_area);
        if !self.title.is_empty() {
            builder.caption(&self.title, title_font);
        }
        let mut chart = builder
            .build_cartesian_2d(0.0..self.cols as f64, 0.0..self.rows as f64)
            .map_err(render_error)?;

        let axis = if theme.show_axis {
            backend_color(theme.axis_color)
        } else {
            backend_color(Rgba::TRANSPARENT)
        };
        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&|_| String::new())
            .axis_style(&axis)
            .label_style(tick_font.clone())
            .draw()
            .map_err(render_error)?;

        // Row 0 of the matrix sits at the top of the grid.
        chart
            .draw_series((0..self.values.len()).map(|idx| {
                let r = idx / self.cols;
                let c = idx % self.cols;
                let y0 = (self.rows - 1 - r) as f64;
                let fill = backend_color(self.cell_color(self.values[idx], min, max)).filled();
                Rectangle::new([(c as f64, y0), (c as f64 + 1.0, y0 + 1.0)], fill)
            }))
            .map_err(render_error)?;

        if self.annotate {
            let light = backend_color(Rgba::WHITE);
            let dark = text;
            chart
                .draw_series((0..self.values.len()).map(|idx| {
                    let r = idx / self.cols;
                    let c = idx % self.cols;
                    let value = self.values[idx];
                    let cell = self.cell_color(value, min, max);
                    let ink = if cell.luminance() < 0.5 { light } else { dark };
                    let style = (family, theme.tick_font_size as i32)
                        .into_font()
                        .color(&ink)
                        .pos(Pos::new(HPos::Center, VPos::Center));
                    Text::new(
                        format!("{value:.2}"),
                        (c as f64 + 0.5, (self.rows - 1 - r) as f64 + 0.5),
                        style,
                    )
                }))
                .map_err(render_error)?;
        }

        if !self.col_labels.is_empty() {
            let style = tick_font.pos(Pos::new(HPos::Center, VPos::Top));
            for (c, name) in self.col_labels.iter().enumerate() {
                let (px, py) = chart.backend_coord(&(c as f64 + 0.5, 0.0));
                root.draw(&Text::new(name.clone(), (px, py + 4), style.clone()))
                    .map_err(render_error)?;
            }
        }
        if !self.row_labels.is_empty() {
            let style = tick_font.pos(Pos::new(HPos::Right, VPos::Center));
            for (r, name) in self.row_labels.iter().enumerate() {
                let (px, py) = chart.backend_coord(&(0.0, (self.rows - 1 - r) as f64 + 0.5));
                root.draw(&Text::new(name.clone(), (px - 6, py), style.clone()))
                    .map_err(render_error)?;
            }
        }

        Ok(())
    }
}
