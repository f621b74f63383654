//! Time-series reshaping stages.
//!
//! - `normalize`: lay raw series out on explicit timestamps
//! - `infer`: estimate a step from observed timestamps
//! - `reconcile`: bring series with different steps onto one grid
//! - `resample`: bucket a series onto a coarser epoch-aligned grid
/// Step inference.
pub mod infer;
/// Raw series to timestamped series.
pub mod normalize;
/// Common-step computation and resample planning.
pub mod reconcile;
/// Bucketing and aggregation.
pub mod resample;
