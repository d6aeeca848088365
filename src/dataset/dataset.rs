//! Dataset container and builder.
//!
//! This module provides [`Dataset`] and [`DatasetBuilder`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::Column;
use super::error::DatasetError;
use super::value::Value;

/// A column-oriented table: an insertion-ordered mapping from column name
/// to an equal-length [`Column`].
///
/// # Shape Invariant
///
/// Every column has the same number of rows. Construction and insertion
/// enforce this with [`DatasetError::ShapeMismatch`]; row deletion removes
/// the same indices from every column.
///
/// # Construction
///
/// Use [`Dataset::builder`] for fluent construction, or
/// [`Dataset::from_columns`] when columns are already materialized.
///
/// # Example
///
/// ```
/// use tabprep::Dataset;
///
/// let ds = Dataset::builder()
///     .column("idade", [20.0, 30.0, 50.0])
///     .column("cidade", ["A", "B", "C"])
///     .build()
///     .unwrap();
///
/// assert_eq!(ds.n_rows(), 3);
/// assert_eq!(ds.n_columns(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: IndexMap<String, Column>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fluent construction.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Create a dataset from (name, cells) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ShapeMismatch`] if the columns differ in
    /// length. No dataset is produced on failure.
    pub fn from_columns<N, I>(columns: I) -> Result<Self, DatasetError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Value>)>,
    {
        columns
            .into_iter()
            .fold(Self::builder(), |builder, (name, cells)| {
                builder.column(name, cells)
            })
            .build()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of rows. Zero for a dataset with no columns.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    /// Number of columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if a column with this name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownColumn`] if absent.
    pub fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        self.columns
            .get(name)
            .ok_or_else(|| DatasetError::UnknownColumn(name.to_owned()))
    }

    /// Get a column by name for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownColumn`] if absent.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column, DatasetError> {
        self.columns
            .get_mut(name)
            .ok_or_else(|| DatasetError::UnknownColumn(name.to_owned()))
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// (name, column) pairs in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(name, col)| (name.as_str(), col))
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a column, replacing any existing column of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ShapeMismatch`] if the column's length does
    /// not match the current row count (unless the dataset is empty).
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), DatasetError> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(DatasetError::ShapeMismatch {
                expected: self.n_rows(),
                got: column.len(),
                column: name,
            });
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Remove a column by name, returning it if present.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        self.columns.shift_remove(name)
    }

    /// Delete the given rows from every column.
    ///
    /// Indices are deduplicated and removed from highest to lowest, so the
    /// deletion pass never reads an already-shifted index. Out-of-range
    /// indices are ignored.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        let n_rows = self.n_rows();
        let mut sorted: Vec<usize> = indices.iter().copied().filter(|&i| i < n_rows).collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        for column in self.columns.values_mut() {
            for &row in &sorted {
                column.remove(row);
            }
        }
    }

    // =========================================================================
    // Column selection
    // =========================================================================

    /// Resolve a target column set, validating existence eagerly.
    ///
    /// An empty slice is the recognized shorthand for "all columns currently
    /// in the dataset", evaluated at call time.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownColumn`] for the first absent name.
    pub fn resolve_columns(&self, columns: &[&str]) -> Result<Vec<String>, DatasetError> {
        if columns.is_empty() {
            return Ok(self.columns.keys().cloned().collect());
        }
        let mut resolved = Vec::with_capacity(columns.len());
        for &name in columns {
            if !self.columns.contains_key(name) {
                return Err(DatasetError::UnknownColumn(name.to_owned()));
            }
            resolved.push(name.to_owned());
        }
        Ok(resolved)
    }
}

/// Fluent builder for [`Dataset`] construction.
///
/// The shape invariant is validated once in [`build`](Self::build), so a
/// mismatched column fails construction before any dataset exists.
///
/// # Example
///
/// ```
/// use tabprep::{Dataset, DatasetError};
///
/// let result = Dataset::builder()
///     .column("a", [1.0, 2.0])
///     .column("b", [3.0])
///     .build();
/// assert!(matches!(result, Err(DatasetError::ShapeMismatch { .. })));
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<(String, Column)>,
}

impl DatasetBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column. Cells accept anything convertible to [`Value`],
    /// including `Option` (where `None` becomes null).
    pub fn column<I, V>(mut self, name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let column = cells.into_iter().map(Into::into).collect();
        self.columns.push((name.into(), column));
        self
    }

    /// Build the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ShapeMismatch`] if any column's length
    /// differs from the first column's.
    pub fn build(self) -> Result<Dataset, DatasetError> {
        let expected = self.columns.first().map(|(_, c)| c.len());
        let mut columns = IndexMap::with_capacity(self.columns.len());
        for (name, column) in self.columns {
            if let Some(expected) = expected {
                if column.len() != expected {
                    return Err(DatasetError::ShapeMismatch {
                        expected,
                        got: column.len(),
                        column: name,
                    });
                }
            }
            columns.insert(name, column);
        }
        Ok(Dataset { columns })
    }
}
