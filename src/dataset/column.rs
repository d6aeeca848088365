//! Column storage.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// An ordered, index-aligned sequence of cells within a [`Dataset`].
///
/// Row `i` of every column in a dataset belongs to the same logical record,
/// so columns never grow or shrink independently once inside a dataset.
///
/// [`Dataset`]: super::Dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    values: Vec<Value>,
}

impl Column {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the cell at `row`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// All cells in row order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Mutable access to all cells.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    /// Iterate over cells in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Append a cell.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Remove the cell at `row`, shifting later rows down by one.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn remove(&mut self, row: usize) -> Value {
        self.values.remove(row)
    }

    /// Returns true if any cell is null.
    pub fn has_nulls(&self) -> bool {
        self.values.iter().any(Value::is_null)
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Returns true if every non-null cell is numeric.
    ///
    /// An empty or all-null column counts as numeric.
    pub fn is_numeric(&self) -> bool {
        self.values
            .iter()
            .all(|v| matches!(v, Value::Null | Value::Number(_)))
    }
}

impl FromIterator<Value> for Column {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Value>> for Column {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}
