//! In-place dataset preprocessing transforms.
//!
//! # Key Types
//!
//! - [`Preprocessor`]: facade owning the dataset, chainable operations
//! - [`FillMethod`] / [`ScaleMethod`] / [`EncodeMethod`]: closed method
//!   enumerations, parseable from their string names
//!
//! The transform functions themselves ([`missing`], [`scale`], [`encode`])
//! are plain functions over a `&mut Dataset` borrow, so they can be used
//! without the facade. Every mutating call is atomic: validation happens
//! before the first cell is written.

pub mod encode;
pub mod missing;
mod pipeline;
pub mod scale;

pub use encode::{EncodeMethod, MISSING_SENTINEL};
pub use missing::FillMethod;
pub use pipeline::Preprocessor;
pub use scale::ScaleMethod;
