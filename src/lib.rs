//! # Sello-Viz
//!
//! Statistical charting library in the corporate house style.
//!
//! Sello-viz renders line, bar, scatter, histogram, heatmap, and pie charts
//! to SVG with brand colors and themes applied by default, and bundles the
//! statistical tests the house analytics teams reach for: Shapiro-Wilk
//! normality checks, Student's and Welch's t-tests, Mann-Whitney U, and an
//! automatic two-group comparison that picks between them.
//!
//! ## Quick Start
//!
//! ```rust
//! use sello_viz::prelude::*;
//!
//! // Pick the right two-group test automatically: the outlier in the
//! // second sample fails the normality check, so Mann-Whitney U is used.
//! let result = compare(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 100.0], 0.05)?;
//! assert_eq!(result.choice, TestChoice::Nonparametric);
//!
//! // Render a chart to SVG.
//! let svg = LineChart::new()
//!     .data(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 5.0])
//!     .title("Throughput")
//!     .build()?
//!     .to_svg_string()?;
//! assert!(svg.contains("<svg"));
//! # Ok::<(), sello_viz::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize derives on results, themes, and palettes

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in charting code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and gradient interpolation.
pub mod color;

/// House brand colors and ordered palettes.
pub mod palette;

/// Chart themes.
pub mod theme;

/// Columnar data frame for table-shaped input.
pub mod data;

// ============================================================================
// Statistics
// ============================================================================

/// Statistical tests and descriptive statistics.
pub mod stats;

// ============================================================================
// Charts
// ============================================================================

/// High-level chart types rendered to SVG.
pub mod plots;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for sello-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use sello_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::data::{DataFrame, DataValue};
    pub use crate::error::{Error, Result};
    pub use crate::palette::Palette;
    pub use crate::plots::{
        BarChart, BarGroup, BinStrategy, Heatmap, Histogram, LineChart, PieChart, ScatterPlot,
        Series,
    };
    pub use crate::stats::{
        compare, mann_whitney_u, shapiro_wilk, student_t_test, welch_t_test, Comparison,
        MannWhitneyResult, NormalityVerdict, TTestResult, TestChoice, DEFAULT_ALPHA,
    };
    pub use crate::theme::Theme;
}

// ============================================================================
// Tests
// ============================================================================
