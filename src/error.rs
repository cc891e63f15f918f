//! Error types for sello-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sello-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sample too small for the requested statistical procedure.
    #[error("insufficient data: {test} requires at least {required} observations, got {actual}")]
    InsufficientData {
        /// Name of the procedure that rejected the sample.
        test: &'static str,
        /// Minimum number of observations required.
        required: usize,
        /// Number of observations provided.
        actual: usize,
    },

    /// Sample larger than the validity ceiling of the procedure.
    #[error("sample too large: {test} is valid up to {maximum} observations, got {actual}")]
    SampleTooLarge {
        /// Name of the procedure that rejected the sample.
        test: &'static str,
        /// Maximum number of observations supported.
        maximum: usize,
        /// Number of observations provided.
        actual: usize,
    },

    /// Non-finite observation (NaN or infinity) in input data.
    #[error("invalid input: {context} contains a non-finite value at index {index}")]
    NonFinite {
        /// Which input the value was found in.
        context: &'static str,
        /// Index of the offending observation.
        index: usize,
    },

    /// Negative value where only non-negative input makes sense.
    #[error("invalid input: {context} contains a negative value at index {index}")]
    NegativeValue {
        /// Which input the value was found in.
        context: &'static str,
        /// Index of the offending observation.
        index: usize,
    },

    /// Significance level outside the open interval (0, 1).
    #[error("invalid significance level: alpha must be in (0, 1), got {alpha}")]
    InvalidAlpha {
        /// The rejected alpha value.
        alpha: f64,
    },

    /// Sample whose values carry no information for the procedure
    /// (zero range or zero variance).
    #[error("degenerate sample: {context}")]
    DegenerateSample {
        /// What was degenerate about the input.
        context: &'static str,
    },

    /// Invalid dimensions for a chart surface.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Column name not present in a data frame.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Column exists but does not hold the requested value type.
    #[error("Column type mismatch: {column} does not hold {expected} values")]
    ColumnTypeMismatch {
        /// Name of the offending column.
        column: String,
        /// Value type the caller asked for.
        expected: &'static str,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Rendering error reported by the drawing backend.
    #[error("Rendering error: {0}")]
    Rendering(String),
}
