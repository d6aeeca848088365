//! Categorical-to-numeric column encoding.
//!
//! Null cells participate in encoding like any other category: they are
//! mapped to the fixed [`MISSING_SENTINEL`] token before sorting, so a
//! column with nulls gains a code (or an indicator column) for them.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::{Column, Dataset, DatasetError, Value};

/// Category token standing in for null cells during encoding.
pub const MISSING_SENTINEL: &str = "missing";

/// Which categorical encoding to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncodeMethod {
    /// Replace each category with its sorted-rank integer code.
    Label,
    /// Replace the column with one binary indicator column per category.
    OneHot,
}

impl FromStr for EncodeMethod {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" => Ok(EncodeMethod::Label),
            "oneHot" => Ok(EncodeMethod::OneHot),
            other => Err(DatasetError::UnsupportedEncodeMethod(other.to_owned())),
        }
    }
}

fn sentinelize(cell: &Value) -> Value {
    if cell.is_null() {
        Value::Category(MISSING_SENTINEL.to_owned())
    } else {
        cell.clone()
    }
}

/// Distinct sentinelized values of a column, sorted ascending.
fn sorted_distinct(dataset: &Dataset, column: &str) -> Result<Vec<Value>, DatasetError> {
    let distinct: BTreeSet<Value> = dataset.column(column)?.iter().map(sentinelize).collect();
    Ok(distinct.into_iter().collect())
}

/// Label-encode the target columns in place.
///
/// Each column's distinct values (nulls as the sentinel) are sorted
/// ascending and assigned integer codes by rank starting at 0; every row
/// is overwritten with its value's code.
pub fn label_encode(dataset: &mut Dataset, columns: &[&str]) -> Result<(), DatasetError> {
    let targets = dataset.resolve_columns(columns)?;

    let mut rankings = Vec::with_capacity(targets.len());
    for name in &targets {
        rankings.push(sorted_distinct(dataset, name)?);
    }

    for (name, ranking) in targets.iter().zip(rankings) {
        for cell in dataset.column_mut(name)?.values_mut() {
            let key = sentinelize(cell);
            // ranking holds every sentinelized value of the column
            let code = ranking.binary_search(&key).unwrap_or(0);
            *cell = Value::Number(code as f64);
        }
    }
    Ok(())
}

/// One-hot encode the target columns.
///
/// For each distinct value (sorted, nulls as the sentinel) a new column
/// named `<original>_<value>` is appended holding 1 where the row equals
/// that value and 0 otherwise; the original column is then removed.
pub fn one_hot_encode(dataset: &mut Dataset, columns: &[&str]) -> Result<(), DatasetError> {
    let targets = dataset.resolve_columns(columns)?;

    // build every indicator column before touching the dataset
    let mut encoded: Vec<(String, Vec<(String, Column)>)> = Vec::with_capacity(targets.len());
    for name in &targets {
        let distinct = sorted_distinct(dataset, name)?;
        let cells = dataset.column(name)?;

        let mut indicators = Vec::with_capacity(distinct.len());
        for value in &distinct {
            let indicator: Column = cells
                .iter()
                .map(|cell| {
                    if sentinelize(cell) == *value {
                        Value::Number(1.0)
                    } else {
                        Value::Number(0.0)
                    }
                })
                .collect();
            indicators.push((format!("{name}_{value}"), indicator));
        }
        encoded.push((name.clone(), indicators));
    }

    for (name, indicators) in encoded {
        for (indicator_name, indicator) in indicators {
            dataset.insert_column(indicator_name, indicator)?;
        }
        dataset.remove_column(&name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(ds: &Dataset, column: &str) -> Vec<f64> {
        ds.column(column)
            .unwrap()
            .iter()
            .map(|v| v.as_number().unwrap())
            .collect()
    }

    #[test]
    fn label_encode_alphabetical_ranks() {
        let mut ds = Dataset::builder()
            .column("cor", ["azul", "verde", "vermelho", "azul"])
            .build()
            .unwrap();
        label_encode(&mut ds, &["cor"]).unwrap();
        assert_eq!(numbers(&ds, "cor"), [0.0, 1.0, 2.0, 0.0]);
    }

    #[test]
    fn label_encode_null_uses_sentinel_category() {
        let mut ds = Dataset::builder()
            .column("c", [Some("A"), None, Some("A")])
            .build()
            .unwrap();
        label_encode(&mut ds, &["c"]).unwrap();
        // sorted categories: "A" < "missing"
        assert_eq!(numbers(&ds, "c"), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn label_encode_codes_are_dense_ranks() {
        let mut ds = Dataset::builder()
            .column("c", ["d", "b", "a", "c", "b"])
            .build()
            .unwrap();
        label_encode(&mut ds, &["c"]).unwrap();
        assert_eq!(numbers(&ds, "c"), [3.0, 1.0, 0.0, 2.0, 1.0]);
    }

    #[test]
    fn one_hot_replaces_column_with_indicators() {
        let mut ds = Dataset::builder()
            .column("cor", ["azul", "verde", "vermelho", "azul"])
            .build()
            .unwrap();
        one_hot_encode(&mut ds, &["cor"]).unwrap();

        assert!(!ds.contains_column("cor"));
        assert_eq!(numbers(&ds, "cor_azul"), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(numbers(&ds, "cor_verde"), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(numbers(&ds, "cor_vermelho"), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn one_hot_rows_sum_to_one() {
        let mut ds = Dataset::builder()
            .column("c", [Some("x"), None, Some("y"), Some("x")])
            .build()
            .unwrap();
        one_hot_encode(&mut ds, &["c"]).unwrap();

        let names: Vec<String> = ds
            .column_names()
            .filter(|n| n.starts_with("c_"))
            .map(str::to_owned)
            .collect();
        assert_eq!(names, ["c_missing", "c_x", "c_y"]);

        for row in 0..4 {
            let sum: f64 = names
                .iter()
                .map(|n| ds.column(n).unwrap().get(row).unwrap().as_number().unwrap())
                .sum();
            assert_eq!(sum, 1.0);
        }
    }

    #[test]
    fn one_hot_numeric_values_name_without_fraction() {
        let mut ds = Dataset::builder()
            .column("idade", [20.0, 30.0, 20.0])
            .build()
            .unwrap();
        one_hot_encode(&mut ds, &["idade"]).unwrap();
        assert!(ds.contains_column("idade_20"));
        assert!(ds.contains_column("idade_30"));
    }

    #[test]
    fn one_hot_keeps_other_columns() {
        let mut ds = Dataset::builder()
            .column("keep", [1.0, 2.0])
            .column("c", ["a", "b"])
            .build()
            .unwrap();
        one_hot_encode(&mut ds, &["c"]).unwrap();
        assert_eq!(
            ds.column_names().collect::<Vec<_>>(),
            ["keep", "c_a", "c_b"]
        );
        assert_eq!(ds.n_rows(), 2);
    }

    #[test]
    fn encode_unknown_column_is_rejected_eagerly() {
        let mut ds = Dataset::builder().column("a", [1.0]).build().unwrap();
        let before = ds.clone();
        assert!(matches!(
            label_encode(&mut ds, &["a", "nope"]),
            Err(DatasetError::UnknownColumn(_))
        ));
        assert!(matches!(
            one_hot_encode(&mut ds, &["nope"]),
            Err(DatasetError::UnknownColumn(_))
        ));
        assert_eq!(ds, before);
    }

    #[test]
    fn encode_method_parses() {
        assert_eq!("label".parse::<EncodeMethod>().unwrap(), EncodeMethod::Label);
        assert_eq!(
            "oneHot".parse::<EncodeMethod>().unwrap(),
            EncodeMethod::OneHot
        );
        assert!(matches!(
            "ordinal".parse::<EncodeMethod>(),
            Err(DatasetError::UnsupportedEncodeMethod(m)) if m == "ordinal"
        ));
    }
}
