//! Histogram with automatic binning and an optional density overlay.
//!
//! Binning supports the Sturges, Scott, and Freedman-Diaconis rules as
//! well as a fixed bin count. The overlay is a Gaussian kernel density
//! estimate scaled to the bar heights.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, Color, DrawingArea, IntoDrawingArea, IntoFont, Rectangle, SVGBackend,
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
use crate::palette::HOUSE_DARK_GREEN;
use crate::stats::{ensure_finite, kde, percentile_of_sorted, std_dev};
use crate::theme::Theme;

/// Grid resolution of the density overlay.
const KDE_POINTS: usize = 200;

/// Binning strategy for histograms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinStrategy {
    /// Sturges' rule: `ceil(log2(n) + 1)`.
    Sturges,
    /// Scott's rule: bin width `3.5 * sd / n^(1/3)`.
    Scott,
    /// Freedman-Diaconis rule: bin width `2 * IQR / n^(1/3)`.
    FreedmanDiaconis,
    /// Fixed number of bins.
    Fixed(usize),
}

impl Default for BinStrategy {
    fn default() -> Self {
        Self::Fixed(30)
    }
}

/// Builder for creating histograms.
#[derive(Debug, Clone)]
pub struct Histogram {
    data: Vec<f64>,
    strategy: BinStrategy,
    color: Option<Rgba>,
    kde_color: Option<Rgba>,
    title: String,
    x_label: String,
    y_label: String,
    theme: Theme,
    width: u32,
    height: u32,
    density: bool,
    show_kde: bool,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create a new histogram builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            strategy: BinStrategy::default(),
            color: None,
            kde_color: None,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: false,
            show_kde: false,
        }
    }

    /// Create a histogram from a numeric column of a data frame. The x axis
    /// takes its label from the column name.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is missing or non-numeric.
    pub fn from_frame(frame: &DataFrame, column: &str) -> Result<Self> {
        Ok(Self::new().data(&frame.numeric_column(column)?).x_label(column))
    }

    /// Set the data.
    #[must_use]
    pub fn data(mut self, data: &[f64]) -> Self {
        self.data = data.to_vec();
        self
    }

    /// Set the binning strategy.
    #[must_use]
    pub fn bins(mut self, strategy: BinStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the bar color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the density overlay color.
    #[must_use]
    pub fn kde_color(mut self, color: Rgba) -> Self {
        self.kde_color = Some(color);
        self
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

    /// Plot probability density instead of counts.
    #[must_use]
    pub fn density(mut self, density: bool) -> Self {
        self.density = density;
        self
    }

    /// Enable or disable the kernel density overlay.
    #[must_use]
    pub fn kde(mut self, show: bool) -> Self {
        self.show_kde = show;
        self
    }

    /// Calculate the number of bins for the current data and strategy.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        let n = self.data.len();
        if n == 0 {
            return 1;
        }
        let nf = n as f64;
        let sturges = (nf.log2().ceil() + 1.0) as usize;

        match self.strategy {
            BinStrategy::Sturges => sturges,
            BinStrategy::Scott => {
                let width = 3.5 * std_dev(&self.data) / nf.cbrt();
                Self::bins_for_width(self.data_range(), width).unwrap_or(sturges)
            }
            BinStrategy::FreedmanDiaconis => {
                let width = 2.0 * self.iqr() / nf.cbrt();
                Self::bins_for_width(self.data_range(), width).unwrap_or(sturges)
            }
            BinStrategy::Fixed(bins) => bins.max(1),
        }
        .max(1)
    }

    fn bins_for_width(range: f64, width: f64) -> Option<usize> {
        if width > 0.0 && range > 0.0 {
            Some((range / width).ceil() as usize)
        } else {
            None
        }
    }

    fn data_range(&self) -> f64 {
        let (min, max) = extent(self.data.iter().copied());
        max - min
    }

    fn iqr(&self) -> f64 {
        if self.data.len() < 4 {
            return self.data_range();
        }
        let mut sorted = self.data.clone();
        sorted.sort_by(f64::total_cmp);
        percentile_of_sorted(&sorted, 0.75) - percentile_of_sorted(&sorted, 0.25)
    }

    /// Build and validate the histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty or non-finite, the dimensions
    /// are zero, or the density overlay is requested for data it cannot be
    /// estimated from (fewer than two observations, or all identical).
    pub fn build(self) -> Result<Self> {
        ensure_dimensions(self.width, self.height)?;
        if self.data.is_empty() {
            return Err(Error::EmptyData);
        }
        ensure_finite("histogram data", &self.data)?;
        if self.show_kde {
            if self.data.len() < 2 {
                return Err(Error::InsufficientData {
                    test: "kernel density estimation",
                    required: 2,
                    actual: self.data.len(),
                });
            }
            if std_dev(&self.data) <= 0.0 {
                return Err(Error::DegenerateSample {
                    context: "kernel density estimation requires non-constant data",
                });
            }
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

    fn bin_layout(&self) -> (f64, f64, Vec<usize>) {
        let bins = self.bin_count();
        let (min, max) = extent(self.data.iter().copied());
        let (lo, hi) = if (max - min).abs() < f64::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let bin_width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &value in &self.data {
            let index = (((value - lo) / bin_width) as usize).min(bins - 1);
            counts[index] += 1;
        }
        (lo, bin_width, counts)
    }

    fn draw_on(&self, root: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<()> {
        let (lo, bin_width, counts) = self.bin_layout();
        debug!(
            observations = self.data.len(),
            bins = counts.len(),
            density = self.density,
            width = self.width,
            height = self.height,
            "rendering histogram"
        );

        let theme = &self.theme;
        root.fill(&backend_color(theme.background))
            .map_err(render_error)?;

        let n = self.data.len() as f64;
        let heights: Vec<f64> = counts
            .iter()
            .map(|&c| {
                if self.density {
                    c as f64 / (n * bin_width)
                } else {
                    c as f64
                }
            })
            .collect();

        let overlay = if self.show_kde {
            let curve = kde(&self.data, KDE_POINTS)?;
            let scale = if self.density { 1.0 } else { n * bin_width };
            Some(
                curve
                    .into_iter()
                    .map(|(x, d)| (x, d * scale))
                    .collect::<Vec<_>>(),
            )
        } else {
            None
        };

        let hi = lo + bin_width * counts.len() as f64;
        let (mut x_lo, mut x_hi) = (lo, hi);
        let mut y_hi = heights.iter().copied().fold(0.0_f64, f64::max);
        if let Some(curve) = &overlay {
            let (c_lo, c_hi) = extent(curve.iter().map(|&(x, _)| x));
            x_lo = x_lo.min(c_lo);
            x_hi = x_hi.max(c_hi);
            y_hi = y_hi.max(curve.iter().map(|&(_, y)| y).fold(0.0_f64, f64::max));
        }

        let text = backend_color(theme.text_color);
        let family = theme.font_family.as_str();
        let title_font = (family, theme.title_font_size as i32).into_font().color(&text);
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
            .build_cartesian_2d(padded_range(x_lo, x_hi), 0.0..y_hi * 1.05)
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
            .label_style(tick_font)
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str());
        if !theme.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;

        let fill = backend_color(self.color.unwrap_or(theme.series_color(0))).filled();
        chart
            .draw_series(heights.iter().enumerate().map(|(i, &h)| {
                let x0 = lo + i as f64 * bin_width;
                Rectangle::new([(x0, 0.0), (x0 + bin_width, h)], fill)
            }))
            .map_err(render_error)?;

        if let Some(curve) = overlay {
            let stroke = backend_color(self.kde_color.unwrap_or(HOUSE_DARK_GREEN)).stroke_width(2);
            chart
                .draw_series(LineSeries::new(curve, stroke))
                .map_err(render_error)?;
        }

        Ok(())
    }
}
