//! Descriptive statistics over dataset columns.
//!
//! [`Statistics`] is a read-only view: it borrows the dataset for the
//! duration of a batch of calls and never mutates it. Every derived
//! structure (frequency tables, mode lists) is freshly allocated per call.
//!
//! # Null policy
//!
//! Null cells are absent data: numeric aggregates (`mean`, `median`,
//! `variance`, `stdev`) exclude them and divide by the count of present
//! values. `covariance` uses pairwise-complete rows: a row contributes only
//! when both cells are present. Frequency tables, `mode`, and `itemset`
//! treat null as a countable value in its own right.

use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, DatasetError, Value};

/// Whether a cumulative frequency accumulates counts or proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyKind {
    /// Running occurrence counts.
    Absolute,
    /// Running proportions of the column length.
    Relative,
}

impl FromStr for FrequencyKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute" => Ok(FrequencyKind::Absolute),
            "relative" => Ok(FrequencyKind::Relative),
            other => Err(DatasetError::InvalidFrequencyMode(other.to_owned())),
        }
    }
}

/// Read-only statistics engine over one dataset.
///
/// # Example
///
/// ```
/// use tabprep::{Dataset, Statistics};
///
/// let ds = Dataset::builder()
///     .column("feature", [10.0, 20.0, 30.0, 40.0, 50.0])
///     .build()
///     .unwrap();
///
/// let stats = Statistics::new(&ds);
/// assert_eq!(stats.mean("feature").unwrap(), 30.0);
/// assert_eq!(stats.variance("feature").unwrap(), 200.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    dataset: &'a Dataset,
}

impl<'a> Statistics<'a> {
    /// Borrow a dataset for statistics.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Collect the non-null numeric values of a column in row order.
    ///
    /// Validates that the column exists and holds only numbers or nulls.
    pub(crate) fn numeric_values(&self, column: &str) -> Result<Vec<f64>, DatasetError> {
        let col = self.dataset.column(column)?;
        let mut values = Vec::with_capacity(col.len());
        for cell in col.iter() {
            match cell {
                Value::Null => {}
                Value::Number(x) => values.push(*x),
                Value::Category(_) => {
                    return Err(DatasetError::NonNumericColumn(column.to_owned()))
                }
            }
        }
        Ok(values)
    }

    // =========================================================================
    // Numeric aggregates
    // =========================================================================

    /// Arithmetic mean over non-null values. `0.0` on an empty or all-null
    /// column.
    pub fn mean(&self, column: &str) -> Result<f64, DatasetError> {
        let values = self.numeric_values(column)?;
        if values.is_empty() {
            return Ok(0.0);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Median over non-null values, averaging the two central values for an
    /// even count. `0.0` when no values remain.
    pub fn median(&self, column: &str) -> Result<f64, DatasetError> {
        let mut values = self.numeric_values(column)?;
        if values.is_empty() {
            return Ok(0.0);
        }
        values.sort_unstable_by(f64::total_cmp);

        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Ok((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Ok(values[mid])
        }
    }

    /// Population variance: mean of squared deviations over non-null values,
    /// divided by their count. `0.0` on an empty or all-null column.
    pub fn variance(&self, column: &str) -> Result<f64, DatasetError> {
        let values = self.numeric_values(column)?;
        if values.is_empty() {
            return Ok(0.0);
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
        Ok(sum_sq / values.len() as f64)
    }

    /// Population standard deviation: square root of [`variance`](Self::variance).
    pub fn stdev(&self, column: &str) -> Result<f64, DatasetError> {
        Ok(self.variance(column)?.sqrt())
    }

    /// Covariance between two columns over pairwise-complete rows.
    ///
    /// Deviations are taken from each column's own non-null mean; rows where
    /// either cell is null are skipped, and the sum of products is divided by
    /// the count of complete pairs. `0.0` when no complete pair exists.
    pub fn covariance(&self, column_a: &str, column_b: &str) -> Result<f64, DatasetError> {
        // mean() validates both columns before anything is paired
        let mean_a = self.mean(column_a)?;
        let mean_b = self.mean(column_b)?;
        let col_a = self.dataset.column(column_a)?;
        let col_b = self.dataset.column(column_b)?;

        let mut sum = 0.0;
        let mut pairs = 0usize;
        for (cell_a, cell_b) in col_a.iter().zip(col_b.iter()) {
            if let (Value::Number(a), Value::Number(b)) = (cell_a, cell_b) {
                sum += (a - mean_a) * (b - mean_b);
                pairs += 1;
            }
        }

        if pairs == 0 {
            return Ok(0.0);
        }
        Ok(sum / pairs as f64)
    }

    // =========================================================================
    // Frequencies
    // =========================================================================

    /// The value(s) with maximum absolute frequency, in first-occurrence
    /// order. Ties are all returned; an empty column yields an empty list.
    /// Works on any column type, and counts null as a value.
    pub fn mode(&self, column: &str) -> Result<Vec<Value>, DatasetError> {
        let frequencies = self.absolute_frequency(column)?;
        let Some(max) = frequencies.values().copied().max() else {
            return Ok(Vec::new());
        };
        Ok(frequencies
            .into_iter()
            .filter(|(_, count)| *count == max)
            .map(|(value, _)| value)
            .collect())
    }

    /// Distinct values of a column in first-occurrence order, nulls included.
    pub fn itemset(&self, column: &str) -> Result<IndexSet<Value>, DatasetError> {
        Ok(self.dataset.column(column)?.iter().cloned().collect())
    }

    /// Occurrence count of each distinct value, keyed in first-occurrence
    /// order. Empty map on an empty column.
    pub fn absolute_frequency(&self, column: &str) -> Result<IndexMap<Value, usize>, DatasetError> {
        let col = self.dataset.column(column)?;
        let mut counts = IndexMap::new();
        for cell in col.iter() {
            *counts.entry(cell.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Proportion of each distinct value, keyed in first-occurrence order.
    /// Proportions sum to 1.0 for a non-empty column.
    pub fn relative_frequency(&self, column: &str) -> Result<IndexMap<Value, f64>, DatasetError> {
        let counts = self.absolute_frequency(column)?;
        let total: usize = counts.values().sum();
        Ok(counts
            .into_iter()
            .map(|(value, count)| (value, count as f64 / total as f64))
            .collect())
    }

    /// Running frequency over distinct values sorted ascending.
    ///
    /// [`FrequencyKind::Absolute`] accumulates counts,
    /// [`FrequencyKind::Relative`] accumulates proportions of the column
    /// length. The returned map iterates in ascending value order.
    pub fn cumulative_frequency(
        &self,
        column: &str,
        kind: FrequencyKind,
    ) -> Result<IndexMap<Value, f64>, DatasetError> {
        let n_rows = self.dataset.column(column)?.len();
        let counts = self.absolute_frequency(column)?;

        let mut keys: Vec<Value> = counts.keys().cloned().collect();
        keys.sort();

        let mut running = 0usize;
        let mut cumulative = IndexMap::with_capacity(keys.len());
        for key in keys {
            running += counts[&key];
            let entry = match kind {
                FrequencyKind::Absolute => running as f64,
                FrequencyKind::Relative => running as f64 / n_rows as f64,
            };
            cumulative.insert(key, entry);
        }
        Ok(cumulative)
    }

    /// P(`event` immediately follows `given`) over the column as an ordered
    /// sequence: the count of adjacent (`given`, `event`) pairs divided by
    /// the total occurrences of `given`. `0.0` if the column has fewer than
    /// two rows or `given` never occurs.
    pub fn conditional_probability(
        &self,
        column: &str,
        event: &Value,
        given: &Value,
    ) -> Result<f64, DatasetError> {
        let values = self.dataset.column(column)?.values();
        if values.len() < 2 {
            return Ok(0.0);
        }

        let given_count = values.iter().filter(|cell| *cell == given).count();
        if given_count == 0 {
            return Ok(0.0);
        }

        let sequence_count = values
            .windows(2)
            .filter(|pair| &pair[0] == given && &pair[1] == event)
            .count();
        Ok(sequence_count as f64 / given_count as f64)
    }
}
