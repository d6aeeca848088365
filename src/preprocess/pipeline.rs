//! The preprocessing facade.

use crate::dataset::{Dataset, DatasetError, Value};
use crate::stats::Statistics;

use super::encode::{label_encode, one_hot_encode, EncodeMethod};
use super::missing::{dropna, fillna, isna, notna, FillMethod};
use super::scale::{min_max_scale, standard_scale, ScaleMethod};

/// Owns a [`Dataset`] and exposes the preprocessing operations as a
/// chainable pipeline.
///
/// Each mutating operation validates eagerly, mutates the owned dataset in
/// place, and returns `&mut Self` so calls can be chained with `?`.
/// `isna`/`notna` instead return the filtered dataset.
///
/// # Example
///
/// ```
/// use tabprep::{Dataset, FillMethod, Preprocessor, ScaleMethod, Value};
///
/// # fn main() -> Result<(), tabprep::DatasetError> {
/// let ds = Dataset::builder()
///     .column("idade", [Some(20.0), Some(30.0), None, Some(50.0)])
///     .build()?;
///
/// let mut prep = Preprocessor::new(ds);
/// prep.fillna(&[], FillMethod::Mean, Value::from(0.0))?
///     .scale(&[], ScaleMethod::MinMax)?;
///
/// assert!(!prep.dataset().column("idade")?.has_nulls());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    dataset: Dataset,
}

impl Preprocessor {
    /// Wrap an already-validated dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Build the dataset from (name, cells) pairs and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ShapeMismatch`] if the columns differ in
    /// length; no preprocessor is produced.
    pub fn from_columns<N, I>(columns: I) -> Result<Self, DatasetError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Value>)>,
    {
        Ok(Self::new(Dataset::from_columns(columns)?))
    }

    /// The owned dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Consume the pipeline and return the dataset.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Read-only statistics over the current dataset.
    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::new(&self.dataset)
    }

    /// Rows where at least one target column is null, restricted to the
    /// target columns. Does not mutate the owned dataset.
    pub fn isna(&self, columns: &[&str]) -> Result<Dataset, DatasetError> {
        isna(&self.dataset, columns)
    }

    /// Rows where no target column is null, restricted to the target
    /// columns. Does not mutate the owned dataset.
    pub fn notna(&self, columns: &[&str]) -> Result<Dataset, DatasetError> {
        notna(&self.dataset, columns)
    }

    /// Fill nulls in the target columns. See
    /// [`missing::fillna`](super::missing::fillna).
    pub fn fillna(
        &mut self,
        columns: &[&str],
        method: FillMethod,
        default_value: Value,
    ) -> Result<&mut Self, DatasetError> {
        fillna(&mut self.dataset, columns, method, &default_value)?;
        Ok(self)
    }

    /// Drop rows with nulls in the target columns. See
    /// [`missing::dropna`](super::missing::dropna).
    pub fn dropna(&mut self, columns: &[&str]) -> Result<&mut Self, DatasetError> {
        dropna(&mut self.dataset, columns)?;
        Ok(self)
    }

    /// Rescale the target columns with the given method.
    pub fn scale(
        &mut self,
        columns: &[&str],
        method: ScaleMethod,
    ) -> Result<&mut Self, DatasetError> {
        match method {
            ScaleMethod::MinMax => min_max_scale(&mut self.dataset, columns)?,
            ScaleMethod::Standard => standard_scale(&mut self.dataset, columns)?,
        }
        Ok(self)
    }

    /// Encode the target columns with the given method.
    ///
    /// An empty target set is an observable no-op: a warning is logged and
    /// the dataset is left unchanged.
    pub fn encode(
        &mut self,
        columns: &[&str],
        method: EncodeMethod,
    ) -> Result<&mut Self, DatasetError> {
        if columns.is_empty() {
            log::warn!("encode called with no target columns; nothing was done");
            return Ok(self);
        }
        match method {
            EncodeMethod::Label => label_encode(&mut self.dataset, columns)?,
            EncodeMethod::OneHot => one_hot_encode(&mut self.dataset, columns)?,
        }
        Ok(self)
    }
}
