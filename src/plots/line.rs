//! Line chart for time series and continuous data.
//!
//! Supports multiple named series with palette-driven coloring and an
//! automatic legend.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, Circle, Color, DrawingArea, IntoDrawingArea, IntoFont, PathElement,
    SVGBackend, SeriesLabelPosition,
};
use plotters::series::LineSeries;
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

// ============================================================================
// Series
// ============================================================================

/// A named data series for line and scatter charts.
#[derive(Debug, Clone)]
pub struct Series {
    /// Series name shown in the legend; empty hides the legend entry.
    pub name: String,
    /// X-axis data.
    pub x: Vec<f64>,
    /// Y-axis data.
    pub y: Vec<f64>,
    /// Explicit color; the theme palette assigns one when `None`.
    pub color: Option<Rgba>,
}

impl Series {
    /// Create a new series.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
            color: None,
        }
    }

    /// Set the x and y data.
    #[must_use]
    pub fn data(mut self, x: &[f64], y: &[f64]) -> Self {
        self.x = x.to_vec();
        self.y = y.to_vec();
        self
    }

    /// Set an explicit color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Get the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

// ============================================================================
// Line Chart
// ============================================================================

/// Builder for creating line charts.
#[derive(Debug, Clone)]
pub struct LineChart {
    series: Vec<Series>,
    title: String,
    x_label: String,
    y_label: String,
    theme: Theme,
    width: u32,
    height: u32,
    stroke_width: u32,
    show_markers: bool,
    marker_size: u32,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChart {
    /// Create a new line chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_width: 2,
            show_markers: false,
            marker_size: 3,
        }
    }

    /// Create a line chart from numeric columns of a data frame, one
    /// series per `y` column sharing the `x` column.
    ///
    /// Each series takes its legend label from its column name.
    ///
    /// # Errors
    ///
    /// Returns an error if any column is missing or non-numeric.
    pub fn from_frame(frame: &DataFrame, x: &str, ys: &[&str]) -> Result<Self> {
        let xs = frame.numeric_column(x)?;
        let mut chart = Self::new().x_label(x);
        for &name in ys {
            chart = chart.add_series(Series::new(name).data(&xs, &frame.numeric_column(name)?));
        }
        Ok(chart)
    }

    /// Add a data series.
    #[must_use]
    pub fn add_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Add data as a single unnamed series (convenience method).
    #[must_use]
    pub fn data(self, x: &[f64], y: &[f64]) -> Self {
        self.add_series(Series::new("").data(x, y))
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Set the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
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

    /// Set the line stroke width in pixels.
    #[must_use]
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width.max(1);
        self
    }

    /// Enable or disable point markers.
    #[must_use]
    pub fn markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    /// Set the marker radius in pixels.
    #[must_use]
    pub fn marker_size(mut self, size: u32) -> Self {
        self.marker_size = size.max(1);
        self
    }

    /// Get the number of series.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Get the total number of points across all series.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.series.iter().map(Series::point_count).sum()
    }

    /// Build and validate the line chart.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no data, series lengths mismatch, the
    /// data is non-finite, or the dimensions are zero.
    pub fn build(self) -> Result<Self> {
        ensure_dimensions(self.width, self.height)?;
        if self.series.is_empty() {
            return Err(Error::EmptyData);
        }
        for series in &self.series {
            if series.x.is_empty() || series.y.is_empty() {
                return Err(Error::EmptyData);
            }
            if series.x.len() != series.y.len() {
                return Err(Error::DataLengthMismatch {
                    x_len: series.x.len(),
                    y_len: series.y.len(),
                });
            }
            ensure_finite("x data", &series.x)?;
            ensure_finite("y data", &series.y)?;
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
            series = self.series.len(),
            points = self.total_points(),
            width = self.width,
            height = self.height,
            "rendering line chart"
        );

        let theme = &self.theme;
        root.fill(&backend_color(theme.background))
            .map_err(render_error)?;

        let (x_lo, x_hi) = extent(self.series.iter().flat_map(|s| s.x.iter().copied()));
        let (y_lo, y_hi) = extent(self.series.iter().flat_map(|s| s.y.iter().copied()));

        let text = backend_color(theme.text_color);
        let family = theme.font_family.as_str();
        let title_font = (family, theme.title_font_size as i32).into_font().color(&text);
        let label_font = (family, theme.label_font_size as i32).into_font().color(&text);
        let tick_font = (family, theme.tick_font_size as i32).into_font().color(&text);

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(theme.margin)
            .x_label_area_size(40)
            .y_label_area_size(56);
        if !self.title.is_empty() {
            builder.caption(&self.title, title_font);
        }
        let mut chart = builder
            .build_cartesian_2d(padded_range(x_lo, x_hi), padded_range(y_lo, y_hi))
            .map_err(render_error)?;

        let grid = backend_color(theme.grid_color);
        let axis = if theme.show_axis {
            backend_color(theme.axis_color)
        } else {
            backend_color(Rgba::TRANSPARENT)
        };
        let mut mesh = chart.configure_mesh();
        mesh.axis_style(&axis)
            .bold_line_style(grid.stroke_width(theme.grid_width as u32))
            .light_line_style(&grid.mix(0.4))
            .label_style(tick_font.clone())
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str());
        if !theme.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;

        for (index, series) in self.series.iter().enumerate() {
            let color = series.color.unwrap_or(theme.series_color(index));
            let stroke = backend_color(color).stroke_width(self.stroke_width);
            let points = series.points();
            let anno = chart
                .draw_series(LineSeries::new(points.clone(), stroke))
                .map_err(render_error)?;
            if !series.name.is_empty() {
                anno.label(series.name.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], stroke)
                });
            }
            if self.show_markers {
                let fill = backend_color(color).filled();
                chart
                    .draw_series(
                        points
                            .into_iter()
                            .map(|p| Circle::new(p, self.marker_size, fill)),
                    )
                    .map_err(render_error)?;
            }
        }

        if self.series.iter().any(|s| !s.name.is_empty()) {
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
