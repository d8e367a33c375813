//! Statistic functions for the bootcmp project.
//!
//! This crate provides the building blocks the bootstrap engine evaluates on
//! every resample:
//!
//! - **Descriptive statistics**: mean, median and a summary of an observed sample
//! - **Percentiles**: nearest-rank quantile positions in sorted data, and the
//!   index bounds of a two-sided percentile interval
//!
//! # Modules
//!
//! - [`descriptive`]: Mean, median and descriptive summaries
//! - [`percentiles`]: Quantile indices and percentile intervals
//!
//! # Examples
//!
//! ## Computing the mean and median
//!
//! ```
//! use bootcmp_stats::descriptive::{mean, median};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 10.0];
//! assert_eq!(mean(&values), Ok(4.0));
//! assert_eq!(median(&values), 3.0);
//! ```
//!
//! ## Locating a 95% percentile interval
//!
//! ```
//! use bootcmp_stats::percentiles::IntervalIndices;
//!
//! let idx = IntervalIndices::new(200, 95.0).unwrap();
//! assert_eq!((idx.lower, idx.upper), (5, 195));
//! ```

pub mod descriptive;
pub mod percentiles;
