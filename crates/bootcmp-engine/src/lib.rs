//! Percentile bootstrap engine.
//!
//! Estimates confidence intervals for the mean and median of a sample by
//! resampling it with replacement, and compares two samples by the share of
//! bootstrap positions where one sample's statistic exceeds the other's.
//!
//! - [`resample`] - Draws one resample with replacement
//! - [`bootstrap`] - Bootstrap distributions and percentile intervals of one sample
//! - [`comparison`] - Index-wise comparison of two samples' distributions
//! - [`Bootstrapper`] - Seeded generator wrapping both operations
//! - [`ResampleSeed`] - Seed for deterministic resampling
//!
//! # Example
//!
//! ```
//! use bootcmp_engine::{BootstrapConfig, Bootstrapper};
//!
//! let mut bootstrapper = Bootstrapper::new();
//! let config = BootstrapConfig::new(1000, 95.0).unwrap();
//! let result = bootstrapper
//!     .compare_statistics(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], &config)
//!     .unwrap();
//!
//! println!(
//!     "mean CI of sample 1: [{:.2}, {:.2}]",
//!     result.sample1.mean.lower_bound, result.sample1.mean.upper_bound
//! );
//! ```

use bootcmp_stats::descriptive::EmptySampleError;

pub use self::{
    bootstrap::{BootstrapConfig, BootstrapStats, ConfidenceResult},
    bootstrapper::Bootstrapper,
    comparison::ComparisonResult,
    seed::{ResampleSeed, SeedParseError},
};

pub mod bootstrap;
mod bootstrapper;
pub mod comparison;
pub mod resample;
mod seed;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum BootstrapError {
    #[display("sample is empty")]
    EmptySample(EmptySampleError),
    #[display("number of bootstrap samples must be positive")]
    ZeroIterations,
    #[display(
        "number of bootstrap samples must be at most {}, got {_0}",
        bootstrap::MAX_NUM_SAMPLES
    )]
    TooManyIterations(#[error(not(source))] usize),
    #[display("confidence level must be within 0 and 100, got {_0}")]
    InvalidConfidence(#[error(not(source))] f64),
}

impl From<EmptySampleError> for BootstrapError {
    fn from(err: EmptySampleError) -> Self {
        Self::EmptySample(err)
    }
}
