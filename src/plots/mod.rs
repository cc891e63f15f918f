//! High-level chart types rendered to SVG.
//!
//! Every chart follows the same flow: configure a builder, validate it with
//! `build()`, then write the output with `save_svg` or `to_svg_string`.
//! Axes, text shaping, and SVG generation are delegated to `plotters`;
//! colors and fonts come from the active [`crate::theme::Theme`].

mod bar;
mod heatmap;
mod histogram;
mod line;
mod pie;
mod scatter;

pub use bar::{BarChart, BarGroup};
pub use heatmap::Heatmap;
pub use histogram::{BinStrategy, Histogram};
pub use line::{LineChart, Series};
pub use pie::PieChart;
pub use scatter::ScatterPlot;

use plotters::style::RGBAColor;

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Default chart width in pixels.
pub const DEFAULT_WIDTH: u32 = 900;

/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Convert a crate color into the backend representation.
pub(crate) fn backend_color(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, f64::from(color.a) / 255.0)
}

/// Wrap a backend error into [`Error::Rendering`].
pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Rendering(err.to_string())
}

/// Pad a data range by 5% so marks do not sit on the frame. A zero-width
/// range widens to one unit.
pub(crate) fn padded_range(min: f64, max: f64) -> std::ops::Range<f64> {
    if (max - min).abs() < f64::EPSILON {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Minimum and maximum of an iterator of finite values.
pub(crate) fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Reject zero-sized output surfaces.
pub(crate) fn ensure_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_color_alpha() {
        let c = backend_color(Rgba::new(10, 20, 30, 255));
        assert_eq!(c.0, 10);
        assert_eq!(c.1, 20);
        assert_eq!(c.2, 30);
        assert!((c.3 - 1.0).abs() < 1e-9);

        let half = backend_color(Rgba::new(0, 0, 0, 128));
        assert!((half.3 - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_range() {
        let r = padded_range(0.0, 10.0);
        assert!((r.start + 0.5).abs() < 1e-9);
        assert!((r.end - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_padded_range_degenerate() {
        let r = padded_range(3.0, 3.0);
        assert!((r.start - 2.5).abs() < 1e-9);
        assert!((r.end - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_extent() {
        let (lo, hi) = extent([3.0, -1.0, 7.5, 2.0].into_iter());
        assert!((lo + 1.0).abs() < 1e-9);
        assert!((hi - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_ensure_dimensions() {
        assert!(ensure_dimensions(100, 100).is_ok());
        assert!(matches!(
            ensure_dimensions(0, 100),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 100
            })
        ));
    }
}
