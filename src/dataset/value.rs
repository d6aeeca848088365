//! Cell value representation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single cell in a [`Column`](super::Column).
///
/// Cells are heterogeneous: a column may mix numbers, categories, and
/// missing values. Missing data is an explicit variant rather than a
/// sentinel float, so numeric validation and encoding can match on it
/// exhaustively.
///
/// # Ordering
///
/// `Value` has a total order used for cumulative frequencies and encoder
/// rank assignment: `Null < Number < Category`. Numbers are ordered with
/// [`f64::total_cmp`], categories lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Missing data.
    Null,
    /// A numeric cell. Integers are widened to `f64`.
    Number(f64),
    /// A categorical cell.
    Category(String),
}

impl Value {
    /// Returns true if this cell is missing.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the numeric value, if this cell is a number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Get the category text, if this cell is categorical.
    #[inline]
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Value::Category(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => state.write_u8(0),
            Value::Number(x) => {
                state.write_u8(1);
                state.write_u64(x.to_bits());
            }
            Value::Category(s) => {
                state.write_u8(2);
                s.hash(state);
            }
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Number(_), Value::Category(_)) => Ordering::Less,
            (Value::Category(_), Value::Number(_)) => Ordering::Greater,
            (Value::Category(a), Value::Category(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    /// Render a cell for display and for derived column names.
    ///
    /// Integral numbers print without a fractional part, so a one-hot
    /// column derived from `20.0` is named `<col>_20`, not `<col>_20.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Number(x) => {
                if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
                    write!(f, "{}", *x as i64)
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Category(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Number(f64::from(x))
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Number(x as f64)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Number(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Category(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Category(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
