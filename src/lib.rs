//! tabprep: column-oriented descriptive statistics and preprocessing.
//!
//! An in-memory tabular data engine for preparing small-to-medium datasets
//! for downstream numeric consumption: descriptive statistics over named
//! columns plus in-place missing-value handling, scaling, and categorical
//! encoding.
//!
//! # Key Types
//!
//! - [`Dataset`] / [`DatasetBuilder`] - the column-oriented table
//! - [`Value`] - tagged cell: null, number, or category
//! - [`Statistics`] - read-only statistics over one dataset
//! - [`Preprocessor`] - chainable preprocessing pipeline owning the dataset
//! - [`FillMethod`] / [`ScaleMethod`] / [`EncodeMethod`] - closed method enums
//!
//! # Example
//!
//! ```
//! use tabprep::{Dataset, EncodeMethod, FillMethod, Preprocessor, ScaleMethod, Value};
//!
//! # fn main() -> Result<(), tabprep::DatasetError> {
//! let ds = Dataset::builder()
//!     .column("idade", [Some(20.0), Some(30.0), None, Some(50.0)])
//!     .column("cor", [Some("azul"), Some("verde"), Some("azul"), None])
//!     .build()?;
//!
//! let mut prep = Preprocessor::new(ds);
//! prep.fillna(&["idade"], FillMethod::Mean, Value::from(0.0))?
//!     .scale(&["idade"], ScaleMethod::MinMax)?
//!     .encode(&["cor"], EncodeMethod::Label)?;
//! # Ok(())
//! # }
//! ```
//!
//! The engine is single-threaded and synchronous; read-only statistics may
//! run concurrently over *different* datasets, but mutation of one dataset
//! must be serialized by the caller.

// Re-export approx traits for users who want to compare scaled outputs
pub use approx;

pub mod dataset;
pub mod preprocess;
pub mod stats;

pub use dataset::{Column, Dataset, DatasetBuilder, DatasetError, Value};
pub use preprocess::{EncodeMethod, FillMethod, Preprocessor, ScaleMethod, MISSING_SENTINEL};
pub use stats::{FrequencyKind, Statistics};
