use rand::Rng;

/// Draws a bootstrap resample from `sample`.
///
/// The result has the same length as `sample`; every element is picked
/// independently and uniformly at random from `sample`, with replacement.
/// An empty `sample` yields an empty resample.
///
/// # Example
///
/// ```
/// use bootcmp_engine::resample;
///
/// let sample = [1.0, 2.0, 3.0];
/// let resampled = resample::resample(&sample, &mut rand::rng());
///
/// assert_eq!(resampled.len(), sample.len());
/// assert!(resampled.iter().all(|v| sample.contains(v)));
/// ```
pub fn resample<R>(sample: &[f64], rng: &mut R) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let mut buf = Vec::with_capacity(sample.len());
    resample_into(sample, rng, &mut buf);
    buf
}

/// Like [`resample`], but writes into `buf`, replacing its contents.
///
/// Lets the bootstrap loop reuse one allocation across iterations.
pub fn resample_into<R>(sample: &[f64], rng: &mut R, buf: &mut Vec<f64>)
where
    R: Rng + ?Sized,
{
    buf.clear();
    if sample.is_empty() {
        return;
    }
    let len = sample.len();
    buf.extend((0..len).map(|_| sample[rng.random_range(0..len)]));
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0x5EED)
    }

    #[test]
    fn test_length_and_membership() {
        let sample = [0.5, -2.0, 7.25, 7.25, 100.0, 3.0, 1e-3];
        let mut rng = rng();
        for _ in 0..200 {
            let resampled = resample(&sample, &mut rng);
            assert_eq!(resampled.len(), sample.len());
            assert!(resampled.iter().all(|v| sample.contains(v)));
        }
    }

    #[test]
    fn test_single_element() {
        let resampled = resample(&[42.0], &mut rng());
        assert_eq!(resampled, vec![42.0]);
    }

    #[test]
    fn test_empty_sample() {
        assert!(resample(&[], &mut rng()).is_empty());
    }

    #[test]
    fn test_resample_into_replaces_contents() {
        let mut buf = vec![9.0; 10];
        resample_into(&[1.0, 2.0], &mut rng(), &mut buf);
        assert_eq!(buf.len(), 2);
        assert!(buf.iter().all(|v| *v == 1.0 || *v == 2.0));
    }

    #[test]
    fn test_draws_with_replacement() {
        // Without replacement every resample would be a permutation and the
        // sum would never change.
        let sample = [1.0, 2.0, 3.0, 4.0];
        let mut rng = rng();
        let changed = (0..100)
            .map(|_| resample(&sample, &mut rng).iter().sum::<f64>())
            .any(|sum| sum != 10.0);
        assert!(changed);
    }

    #[test]
    fn test_every_element_reachable() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut rng = rng();
        let mut seen = [false; 5];
        for _ in 0..100 {
            for v in resample(&sample, &mut rng) {
                seen[sample.iter().position(|s| *s == v).unwrap()] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_same_seed_same_draws() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(resample(&sample, &mut rng()), resample(&sample, &mut rng()));
    }
}
