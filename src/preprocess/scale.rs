//! Per-column numeric rescaling.
//!
//! Both transforms overwrite the original values in place (lossy, no
//! inverse stored) and leave null cells null. Each call is atomic: every
//! target column is validated and its statistics precomputed before any
//! cell is written, so a failing column leaves the dataset untouched.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, DatasetError, Value};
use crate::stats::Statistics;

/// Which rescaling to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleMethod {
    /// Map non-null values to `(x - min) / (max - min)`.
    MinMax,
    /// Map non-null values to `(x - mean) / stdev` (z-score).
    Standard,
}

impl FromStr for ScaleMethod {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minMax" => Ok(ScaleMethod::MinMax),
            "standard" => Ok(ScaleMethod::Standard),
            other => Err(DatasetError::UnsupportedScaleMethod(other.to_owned())),
        }
    }
}

/// Min-max scale the target columns in place.
///
/// Non-null values map to `(x - min) / (max - min)`, with min and max taken
/// over the column's non-null values. When `min == max` every non-null
/// value maps to `0.0`. Nulls remain null.
pub fn min_max_scale(dataset: &mut Dataset, columns: &[&str]) -> Result<(), DatasetError> {
    let targets = dataset.resolve_columns(columns)?;

    // validate and collect spans before mutating anything
    let stats = Statistics::new(dataset);
    let mut spans = Vec::with_capacity(targets.len());
    for name in &targets {
        let values = stats.numeric_values(name)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        spans.push((min, max));
    }

    for (name, (min, max)) in targets.iter().zip(spans) {
        rescale(dataset, name, |x| {
            if max == min {
                0.0
            } else {
                (x - min) / (max - min)
            }
        })?;
    }
    Ok(())
}

/// Z-score scale the target columns in place.
///
/// Non-null values map to `(x - mean) / stdev` with the population stdev
/// from [`Statistics`]. When the stdev is `0.0` every non-null value maps
/// to `0.0`. Nulls remain null.
pub fn standard_scale(dataset: &mut Dataset, columns: &[&str]) -> Result<(), DatasetError> {
    let targets = dataset.resolve_columns(columns)?;

    let stats = Statistics::new(dataset);
    let mut moments = Vec::with_capacity(targets.len());
    for name in &targets {
        moments.push((stats.mean(name)?, stats.stdev(name)?));
    }

    for (name, (mean, stdev)) in targets.iter().zip(moments) {
        rescale(dataset, name, |x| {
            if stdev == 0.0 {
                0.0
            } else {
                (x - mean) / stdev
            }
        })?;
    }
    Ok(())
}

fn rescale(
    dataset: &mut Dataset,
    column: &str,
    f: impl Fn(f64) -> f64,
) -> Result<(), DatasetError> {
    for cell in dataset.column_mut(column)?.values_mut() {
        if let Value::Number(x) = cell {
            *cell = Value::Number(f(*x));
        }
    }
    Ok(())
}
