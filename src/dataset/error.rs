//! Error types for dataset construction and preprocessing.

/// Failures raised by dataset construction, statistics, and preprocessing.
///
/// All validation is eager: a call that returns an error has not mutated
/// the dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Columns of unequal length at construction or insertion.
    #[error("column '{column}' has {got} rows, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// A referenced column does not exist.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A numeric operation was applied to a column holding categorical data.
    #[error("column '{0}' contains non-numeric values")]
    NonNumericColumn(String),

    /// Frequency mode string other than "absolute" or "relative".
    #[error("frequency mode must be 'absolute' or 'relative', got '{0}'")]
    InvalidFrequencyMode(String),

    /// Fill method string other than "mean", "median", "mode", or "default_value".
    #[error("fill method must be 'mean', 'median', 'mode', or 'default_value', got '{0}'")]
    InvalidFillMethod(String),

    /// Scale method string other than "minMax" or "standard".
    #[error("scale method must be 'minMax' or 'standard', got '{0}'")]
    UnsupportedScaleMethod(String),

    /// Encode method string other than "label" or "oneHot".
    #[error("encode method must be 'label' or 'oneHot', got '{0}'")]
    UnsupportedEncodeMethod(String),
}
