/// Error returned when a statistic is requested for an empty dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot compute a statistic of an empty sample")]
pub struct EmptySampleError;

/// Computes the arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`EmptySampleError`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use bootcmp_stats::descriptive::{EmptySampleError, mean};
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// assert_eq!(mean(&[]), Err(EmptySampleError));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, EmptySampleError> {
    if values.is_empty() {
        return Err(EmptySampleError);
    }
    let sum = values.iter().sum::<f64>();
    Ok(sum / values.len() as f64)
}

/// Computes the median of unsorted `values`.
///
/// A sorted copy of the input is taken, so the caller's slice is left
/// untouched. For an even number of values the two middle elements are
/// averaged.
///
/// Returns `f64::NAN` if `values` is empty.
///
/// # Examples
///
/// ```
/// use bootcmp_stats::descriptive::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// assert!(median(&[]).is_nan());
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

/// Like [`median`], but for values already sorted in ascending order.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );

    let len = sorted_values.len();
    if len == 0 {
        return f64::NAN;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    } else {
        sorted_values[mid]
    }
}

/// Descriptive statistics summarizing an observed sample.
///
/// Used to report the point estimates that bootstrap intervals are built
/// around.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median of the dataset.
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use bootcmp_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let mean = mean(sorted_values).ok()?;
        let median = median_of_sorted(sorted_values);
        let count = sorted_values.len();
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        for x in [-3.5, 0.0, 42.0, 1e12] {
            assert_eq!(mean(&[x]), Ok(x));
            assert_eq!(median(&[x]), x);
        }
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(EmptySampleError));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
        assert_eq!(median(&[9.0, 1.0, 5.0, 3.0]), 4.0);
        assert_eq!(median(&[2.0, 2.0]), 2.0);
    }

    #[test]
    fn test_median_empty_is_nan() {
        assert!(median(&[]).is_nan());
        assert!(median_of_sorted(&[]).is_nan());
    }

    #[test]
    fn test_median_permutation_invariant() {
        let values = [7.25, -1.0, 3.5, 3.5, 10.0, 0.125];
        let expected = median(&values);
        let mut rotated = values;
        for _ in 0..values.len() {
            rotated.rotate_left(1);
            assert_eq!(median(&rotated), expected);
        }
        let mut reversed = values;
        reversed.reverse();
        assert_eq!(median(&reversed), expected);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_descriptive_stats() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 4.5);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        assert!(DescriptiveStats::new(std::iter::empty()).is_none());
    }
}
