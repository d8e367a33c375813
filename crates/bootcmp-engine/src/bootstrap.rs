use bootcmp_stats::{descriptive, percentiles::IntervalIndices};
use rand::Rng;

use crate::{BootstrapError, resample};

/// Default number of bootstrap iterations.
pub const DEFAULT_NUM_SAMPLES: usize = 1000;

/// Largest accepted number of bootstrap iterations.
///
/// Both distributions are held in memory, 16 bytes per iteration.
pub const MAX_NUM_SAMPLES: usize = 10_000_000;

/// Default confidence level, in percent.
pub const DEFAULT_CONFIDENCE: f64 = 95.0;

/// Validated parameters of a bootstrap run.
///
/// # Example
///
/// ```
/// use bootcmp_engine::{BootstrapConfig, BootstrapError};
///
/// let config = BootstrapConfig::new(2000, 90.0).unwrap();
/// assert_eq!(config.num_samples(), 2000);
///
/// assert!(matches!(
///     BootstrapConfig::new(0, 95.0),
///     Err(BootstrapError::ZeroIterations)
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapConfig {
    num_samples: usize,
    confidence: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl BootstrapConfig {
    /// Creates a configuration.
    ///
    /// # Arguments
    ///
    /// * `num_samples` - Number of resamples to draw; within
    ///   `1..=MAX_NUM_SAMPLES`
    /// * `confidence` - Confidence level in percent, within `[0, 100]`.
    ///   Both ends are accepted but give degenerate intervals.
    pub fn new(num_samples: usize, confidence: f64) -> Result<Self, BootstrapError> {
        if num_samples == 0 {
            return Err(BootstrapError::ZeroIterations);
        }
        if num_samples > MAX_NUM_SAMPLES {
            return Err(BootstrapError::TooManyIterations(num_samples));
        }
        if !(0.0..=100.0).contains(&confidence) {
            return Err(BootstrapError::InvalidConfidence(confidence));
        }
        Ok(Self {
            num_samples,
            confidence,
        })
    }

    /// Number of resamples drawn per sample.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Confidence level in percent.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Percentile confidence interval of one statistic, together with the
/// bootstrap distribution it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceResult {
    /// Value at the `alpha / 2` quantile of [`Self::values`].
    pub lower_bound: f64,
    /// Value at the `1 - alpha / 2` quantile of [`Self::values`].
    pub upper_bound: f64,
    /// Bootstrap distribution, sorted in ascending order.
    pub values: Vec<f64>,
}

impl ConfidenceResult {
    /// Sorts `values` and reads the interval bounds for `confidence` percent.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn from_values(mut values: Vec<f64>, confidence: f64) -> Option<Self> {
        values.sort_by(f64::total_cmp);
        let idx = IntervalIndices::new(values.len(), confidence)?;
        if idx.upper_clamped {
            log::debug!(
                "upper bound index clamped to {} at {confidence}% confidence",
                idx.upper
            );
        }
        Some(Self {
            lower_bound: values[idx.lower],
            upper_bound: values[idx.upper],
            values,
        })
    }
}

/// Bootstrap intervals of the mean and the median of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapStats {
    pub mean: ConfidenceResult,
    pub median: ConfidenceResult,
}

/// Runs the percentile bootstrap on `sample`.
///
/// Draws `config.num_samples()` resamples, computes the mean and median of
/// each, sorts both distributions and reads the bounds of the
/// `config.confidence()` percent interval from them.
///
/// # Errors
///
/// Returns [`BootstrapError::EmptySample`] if `sample` is empty.
///
/// # Example
///
/// ```
/// use bootcmp_engine::{BootstrapConfig, bootstrap::bootstrap_sampling};
///
/// let sample = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
/// let stats = bootstrap_sampling(&sample, &BootstrapConfig::default(), &mut rand::rng()).unwrap();
///
/// assert_eq!(stats.mean.values.len(), 1000);
/// assert!(stats.mean.lower_bound <= stats.mean.upper_bound);
/// ```
pub fn bootstrap_sampling<R>(
    sample: &[f64],
    config: &BootstrapConfig,
    rng: &mut R,
) -> Result<BootstrapStats, BootstrapError>
where
    R: Rng + ?Sized,
{
    if sample.is_empty() {
        return Err(BootstrapError::EmptySample(descriptive::EmptySampleError));
    }

    let num_samples = config.num_samples();
    let mut means = Vec::with_capacity(num_samples);
    let mut medians = Vec::with_capacity(num_samples);
    let mut buf = Vec::with_capacity(sample.len());
    for _ in 0..num_samples {
        resample::resample_into(sample, rng, &mut buf);
        means.push(descriptive::mean(&buf)?);
        buf.sort_by(f64::total_cmp);
        medians.push(descriptive::median_of_sorted(&buf));
    }

    log::debug!(
        "drew {num_samples} resamples of size {} at {}% confidence",
        sample.len(),
        config.confidence()
    );

    let confidence = config.confidence();
    let mean =
        ConfidenceResult::from_values(means, confidence).ok_or(BootstrapError::ZeroIterations)?;
    let median =
        ConfidenceResult::from_values(medians, confidence).ok_or(BootstrapError::ZeroIterations)?;
    Ok(BootstrapStats { mean, median })
}
