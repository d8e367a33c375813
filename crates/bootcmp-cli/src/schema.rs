//! Serializable report produced by the CLI.

use bootcmp_engine::{
    BootstrapConfig, BootstrapStats, ComparisonResult, ConfidenceResult, ResampleSeed,
};
use bootcmp_stats::descriptive::DescriptiveStats;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Report of the `compare` command.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Timestamp when the report was created (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Seed the resamples were drawn with; pass it to `--seed` to reproduce the run
    pub seed: ResampleSeed,
    pub num_samples: usize,
    /// Confidence level in percent
    pub confidence: f64,
    pub sample1: SampleReport,
    pub sample2: SampleReport,
    pub percentage_mean_sample1_larger: f64,
    pub percentage_median_sample1_larger: f64,
}

/// Report of the `bootstrap` command.
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapReport {
    pub generated_at: DateTime<Utc>,
    pub seed: ResampleSeed,
    pub num_samples: usize,
    pub confidence: f64,
    pub sample: SampleReport,
}

/// Observed statistics and bootstrap intervals of one sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub observed: ObservedStats,
    pub mean: IntervalReport,
    pub median: IntervalReport,
}

/// Statistics of the sample as given, before any resampling.
#[derive(Debug, Clone, Serialize)]
pub struct ObservedStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntervalReport {
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Sorted bootstrap distribution, only present with `--include-distributions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

impl ComparisonReport {
    pub fn new(
        seed: ResampleSeed,
        config: &BootstrapConfig,
        observed: [DescriptiveStats; 2],
        result: ComparisonResult,
        include_distributions: bool,
    ) -> Self {
        let [observed1, observed2] = observed;
        Self {
            generated_at: Utc::now(),
            seed,
            num_samples: config.num_samples(),
            confidence: config.confidence(),
            sample1: SampleReport::new(observed1, result.sample1, include_distributions),
            sample2: SampleReport::new(observed2, result.sample2, include_distributions),
            percentage_mean_sample1_larger: result.percentage_mean_sample1_larger,
            percentage_median_sample1_larger: result.percentage_median_sample1_larger,
        }
    }
}

impl BootstrapReport {
    pub fn new(
        seed: ResampleSeed,
        config: &BootstrapConfig,
        observed: DescriptiveStats,
        stats: BootstrapStats,
        include_distributions: bool,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            seed,
            num_samples: config.num_samples(),
            confidence: config.confidence(),
            sample: SampleReport::new(observed, stats, include_distributions),
        }
    }
}

impl SampleReport {
    fn new(observed: DescriptiveStats, stats: BootstrapStats, include_distributions: bool) -> Self {
        Self {
            observed: ObservedStats::from(observed),
            mean: IntervalReport::new(stats.mean, include_distributions),
            median: IntervalReport::new(stats.median, include_distributions),
        }
    }
}

impl From<DescriptiveStats> for ObservedStats {
    fn from(stats: DescriptiveStats) -> Self {
        let DescriptiveStats {
            count,
            min,
            max,
            mean,
            median,
            variance: _,
            std_dev,
        } = stats;
        Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev,
        }
    }
}

impl IntervalReport {
    fn new(result: ConfidenceResult, include_distribution: bool) -> Self {
        Self {
            lower_bound: result.lower_bound,
            upper_bound: result.upper_bound,
            values: include_distribution.then_some(result.values),
        }
    }
}
