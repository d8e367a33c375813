/// Position of a quantile within a sorted dataset of length `len`.
///
/// Uses the nearest-rank rule `floor(quantile * len)`. The result is clamped
/// to `len - 1`, so `quantile = 1.0` selects the last element instead of
/// indexing one past the end. Negative or NaN quantiles map to index 0.
///
/// Returns `None` if `len` is zero.
///
/// # Examples
///
/// ```
/// use bootcmp_stats::percentiles::quantile_index;
///
/// assert_eq!(quantile_index(1000, 0.025), Some(25));
/// assert_eq!(quantile_index(1000, 0.975), Some(975));
/// assert_eq!(quantile_index(1000, 1.0), Some(999));
/// assert_eq!(quantile_index(0, 0.5), None);
/// ```
#[must_use]
pub fn quantile_index(len: usize, quantile: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(floor_index(len, quantile).min(len - 1))
}

#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
fn floor_index(len: usize, quantile: f64) -> usize {
    // `as` saturates: negative and NaN become 0
    (quantile * len as f64).floor() as usize
}

/// Index bounds of a two-sided percentile interval.
///
/// For a confidence level `C` (percent), `alpha = 1 - C / 100` and the
/// bounds sit at the `alpha / 2` and `1 - alpha / 2` quantiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalIndices {
    /// Index of the lower bound.
    pub lower: usize,
    /// Index of the upper bound.
    pub upper: usize,
    /// Whether the upper index had to be clamped to the last element.
    pub upper_clamped: bool,
}

impl IntervalIndices {
    /// Computes interval indices for a sorted dataset of length `len`.
    ///
    /// Returns `None` if `len` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bootcmp_stats::percentiles::IntervalIndices;
    ///
    /// let idx = IntervalIndices::new(1000, 95.0).unwrap();
    /// assert_eq!((idx.lower, idx.upper), (25, 975));
    ///
    /// let idx = IntervalIndices::new(1000, 100.0).unwrap();
    /// assert_eq!((idx.lower, idx.upper), (0, 999));
    /// assert!(idx.upper_clamped);
    /// ```
    #[must_use]
    pub fn new(len: usize, confidence: f64) -> Option<Self> {
        let alpha = 1.0 - confidence / 100.0;
        let lower = quantile_index(len, alpha / 2.0)?;
        let upper = quantile_index(len, 1.0 - alpha / 2.0)?;
        Some(Self {
            lower,
            upper,
            upper_clamped: floor_index(len, 1.0 - alpha / 2.0) > upper,
        })
    }
}
