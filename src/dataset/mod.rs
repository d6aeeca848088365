//! Column-oriented dataset model.
//!
//! # Key Types
//!
//! - [`Dataset`]: insertion-ordered name → column table with equal-length columns
//! - [`DatasetBuilder`]: fluent construction with shape validation
//! - [`Column`]: one ordered sequence of cells
//! - [`Value`]: tagged cell (null, number, or category)
//! - [`DatasetError`]: every failure the engine can raise

mod column;
#[allow(clippy::module_inception)]
mod dataset;
mod error;
mod value;

pub use column::Column;
pub use dataset::{Dataset, DatasetBuilder};
pub use error::DatasetError;
pub use value::Value;
