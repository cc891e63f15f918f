//! Columnar data frame.
//!
//! A minimal in-memory table so chart builders can accept "table + column
//! names" input shapes. File loading and format support are out of scope.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A value in a data frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataValue {
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
    /// A missing value.
    Null,
}

impl DataValue {
    /// Get as f64, or None if not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

/// A simple columnar data frame.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataFrame {
    /// Column data keyed by column name.
    columns: HashMap<String, Vec<DataValue>>,
    /// Number of rows.
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from x and y arrays (truncated to the shorter length).
    #[must_use]
    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        let n = x.len().min(y.len());
        let mut df = Self::new();
        df.add_column_f64("x", &x[..n]);
        df.add_column_f64("y", &y[..n]);
        df
    }

    /// Create from a single data array stored under the column `data`.
    #[must_use]
    pub fn from_data(data: &[f64]) -> Self {
        let mut df = Self::new();
        df.add_column_f64("data", data);
        df
    }

    /// Add a numeric column.
    pub fn add_column_f64(&mut self, name: &str, data: &[f64]) {
        let values: Vec<DataValue> = data.iter().map(|&v| DataValue::Number(v)).collect();
        self.n_rows = self.n_rows.max(values.len());
        self.columns.insert(name.to_string(), values);
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        let values: Vec<DataValue> =
            data.iter().map(|&s| DataValue::Text(s.to_string())).collect();
        self.n_rows = self.n_rows.max(values.len());
        self.columns.insert(name.to_string(), values);
    }

    /// Get a column's numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] if the column does not exist and
    /// [`Error::ColumnTypeMismatch`] if any value is non-numeric. Missing
    /// values are not silently dropped.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let col = self
            .columns
            .get(name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
        col.iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| Error::ColumnTypeMismatch {
                    column: name.to_string(),
                    expected: "numeric",
                })
            })
            .collect()
    }

    /// Get a column's text values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] if the column does not exist and
    /// [`Error::ColumnTypeMismatch`] if any value is not text.
    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        let col = self
            .columns
            .get(name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
        col.iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| Error::ColumnTypeMismatch {
                    column: name.to_string(),
                    expected: "text",
                })
            })
            .collect()
    }

    /// Get a column's raw values.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get column names, sorted for deterministic iteration.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
