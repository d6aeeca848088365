//! Missing-value handling: row selection, filling, and dropping.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, DatasetError, Value};
use crate::stats::Statistics;

/// How `fillna` chooses the scalar that replaces nulls in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMethod {
    /// Column mean (numeric columns only).
    Mean,
    /// Column median (numeric columns only).
    Median,
    /// First mode of the column; falls back to the default value when the
    /// column has no mode (e.g. it is empty).
    Mode,
    /// The caller-supplied default value.
    DefaultValue,
}

impl FromStr for FillMethod {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(FillMethod::Mean),
            "median" => Ok(FillMethod::Median),
            "mode" => Ok(FillMethod::Mode),
            "default_value" => Ok(FillMethod::DefaultValue),
            other => Err(DatasetError::InvalidFillMethod(other.to_owned())),
        }
    }
}

/// Select the rows where at least one target column is null.
///
/// Returns a new dataset restricted to the target columns, keeping row
/// order. An empty `columns` slice targets all columns.
pub fn isna(dataset: &Dataset, columns: &[&str]) -> Result<Dataset, DatasetError> {
    filter_rows(dataset, columns, true)
}

/// Select the rows where no target column is null.
///
/// Returns a new dataset restricted to the target columns, keeping row
/// order. An empty `columns` slice targets all columns.
pub fn notna(dataset: &Dataset, columns: &[&str]) -> Result<Dataset, DatasetError> {
    filter_rows(dataset, columns, false)
}

fn filter_rows(
    dataset: &Dataset,
    columns: &[&str],
    keep_null_rows: bool,
) -> Result<Dataset, DatasetError> {
    let targets = dataset.resolve_columns(columns)?;
    let rows = null_rows(dataset, &targets)?;

    let mut filtered = Dataset::new();
    for name in &targets {
        let column = dataset.column(name)?;
        let cells: Vec<Value> = column
            .iter()
            .enumerate()
            .filter(|(row, _)| rows.contains(row) == keep_null_rows)
            .map(|(_, cell)| cell.clone())
            .collect();
        filtered.insert_column(name.clone(), cells.into())?;
    }
    Ok(filtered)
}

/// Row indices where at least one of `targets` is null, ascending.
fn null_rows(dataset: &Dataset, targets: &[String]) -> Result<Vec<usize>, DatasetError> {
    let mut rows = Vec::new();
    for row in 0..dataset.n_rows() {
        for name in targets {
            if dataset.column(name)?.get(row).is_some_and(Value::is_null) {
                rows.push(row);
                break;
            }
        }
    }
    Ok(rows)
}

/// Overwrite every null cell of each target column with one fill scalar.
///
/// The scalar is the column mean, median, or first mode (via
/// [`Statistics`]), or `default_value` for [`FillMethod::DefaultValue`].
/// The call is atomic: every fill scalar is computed, and every validation
/// error raised, before the first cell is written.
pub fn fillna(
    dataset: &mut Dataset,
    columns: &[&str],
    method: FillMethod,
    default_value: &Value,
) -> Result<(), DatasetError> {
    let targets = dataset.resolve_columns(columns)?;

    // validate and compute all fill scalars before mutating anything
    let stats = Statistics::new(dataset);
    let mut fills = Vec::with_capacity(targets.len());
    for name in &targets {
        let fill = match method {
            FillMethod::Mean => Value::Number(stats.mean(name)?),
            FillMethod::Median => Value::Number(stats.median(name)?),
            FillMethod::Mode => stats
                .mode(name)?
                .into_iter()
                .next()
                .unwrap_or_else(|| default_value.clone()),
            FillMethod::DefaultValue => default_value.clone(),
        };
        fills.push(fill);
    }

    for (name, fill) in targets.iter().zip(fills) {
        for cell in dataset.column_mut(name)?.values_mut() {
            if cell.is_null() {
                *cell = fill.clone();
            }
        }
    }
    Ok(())
}

/// Delete every row where any target column is null.
///
/// Offending row indices are collected before any mutation, then removed
/// from every column of the dataset (highest index first), keeping the
/// shape invariant intact.
pub fn dropna(dataset: &mut Dataset, columns: &[&str]) -> Result<(), DatasetError> {
    let targets = dataset.resolve_columns(columns)?;
    let rows = null_rows(dataset, &targets)?;
    dataset.remove_rows(&rows);
    Ok(())
}
