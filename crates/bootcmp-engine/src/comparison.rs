use rand::Rng;

use crate::{
    BootstrapError,
    bootstrap::{BootstrapConfig, BootstrapStats, bootstrap_sampling},
};

/// Outcome of bootstrapping two samples against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// Bootstrap intervals of the first sample.
    pub sample1: BootstrapStats,
    /// Bootstrap intervals of the second sample.
    pub sample2: BootstrapStats,
    /// Share of positions, in percent, where sample 1's mean distribution is
    /// strictly greater than sample 2's.
    pub percentage_mean_sample1_larger: f64,
    /// Same as [`Self::percentage_mean_sample1_larger`], for the median.
    pub percentage_median_sample1_larger: f64,
}

/// Bootstraps both samples and estimates how often sample 1's statistic
/// exceeds sample 2's.
///
/// Both samples are bootstrapped with the same `config`, one after the other,
/// drawing from `rng`. The two mean distributions are then compared position
/// by position, and so are the two median distributions.
///
/// Because each distribution is already sorted, position `i` pairs the
/// `i`-th order statistic of sample 1's distribution with the `i`-th order
/// statistic of sample 2's. Values are not paired by the resample draw that
/// produced them.
///
/// # Errors
///
/// Returns [`BootstrapError::EmptySample`] if either sample is empty.
///
/// # Example
///
/// ```
/// use bootcmp_engine::{BootstrapConfig, comparison::compare_statistics};
///
/// let low = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let high = [10.0, 20.0, 30.0, 40.0, 50.0];
/// let result =
///     compare_statistics(&low, &high, &BootstrapConfig::default(), &mut rand::rng()).unwrap();
///
/// assert_eq!(result.percentage_mean_sample1_larger, 0.0);
/// assert_eq!(result.percentage_median_sample1_larger, 0.0);
/// ```
pub fn compare_statistics<R>(
    sample1: &[f64],
    sample2: &[f64],
    config: &BootstrapConfig,
    rng: &mut R,
) -> Result<ComparisonResult, BootstrapError>
where
    R: Rng + ?Sized,
{
    let stats1 = bootstrap_sampling(sample1, config, rng)?;
    let stats2 = bootstrap_sampling(sample2, config, rng)?;

    let num_samples = config.num_samples();
    let percentage_mean_sample1_larger =
        percentage_larger(&stats1.mean.values, &stats2.mean.values, num_samples);
    let percentage_median_sample1_larger =
        percentage_larger(&stats1.median.values, &stats2.median.values, num_samples);

    log::info!(
        "mean(sample 1) > mean(sample 2) in {percentage_mean_sample1_larger:.2}% of resamples, \
         median in {percentage_median_sample1_larger:.2}%"
    );

    Ok(ComparisonResult {
        sample1: stats1,
        sample2: stats2,
        percentage_mean_sample1_larger,
        percentage_median_sample1_larger,
    })
}

#[expect(clippy::cast_precision_loss)]
fn percentage_larger(values1: &[f64], values2: &[f64], num_samples: usize) -> f64 {
    debug_assert_eq!(values1.len(), num_samples);
    debug_assert_eq!(values2.len(), num_samples);
    let count = values1
        .iter()
        .zip(values2)
        .filter(|(v1, v2)| v1 > v2)
        .count();
    count as f64 / num_samples as f64 * 100.0
}
