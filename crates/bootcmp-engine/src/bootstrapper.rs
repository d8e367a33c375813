use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    BootstrapError, ResampleSeed,
    bootstrap::{self, BootstrapConfig, BootstrapStats},
    comparison::{self, ComparisonResult},
};

/// Seeded entry point to the bootstrap engine.
///
/// Owns the pseudo-random generator every resample draws from. Runs made
/// through the same `Bootstrapper` continue the generator's stream, so two
/// consecutive calls never reuse draws; two `Bootstrapper`s created with the
/// same seed replay the same stream.
///
/// # Example
///
/// ```
/// use bootcmp_engine::{BootstrapConfig, Bootstrapper, ResampleSeed};
///
/// let seed = ResampleSeed::from_bytes([7; 16]);
/// let config = BootstrapConfig::new(500, 95.0).unwrap();
/// let sample1 = [2.0, 4.0, 4.0, 5.0, 7.0];
/// let sample2 = [3.0, 5.0, 6.0, 6.0, 8.0];
///
/// let a = Bootstrapper::with_seed(seed).compare_statistics(&sample1, &sample2, &config);
/// let b = Bootstrapper::with_seed(seed).compare_statistics(&sample1, &sample2, &config);
/// assert_eq!(a.unwrap(), b.unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    seed: ResampleSeed,
    rng: Pcg32,
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrapper {
    /// Creates a bootstrapper with a random seed.
    ///
    /// For reproducible results, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: ResampleSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.to_bytes()),
        }
    }

    /// Returns the seed this bootstrapper was created with.
    #[must_use]
    pub fn seed(&self) -> ResampleSeed {
        self.seed
    }

    /// Bootstraps the mean and median of one sample.
    ///
    /// See [`bootstrap::bootstrap_sampling`].
    pub fn bootstrap_sampling(
        &mut self,
        sample: &[f64],
        config: &BootstrapConfig,
    ) -> Result<BootstrapStats, BootstrapError> {
        bootstrap::bootstrap_sampling(sample, config, &mut self.rng)
    }

    /// Bootstraps two samples and compares their statistics.
    ///
    /// See [`comparison::compare_statistics`].
    pub fn compare_statistics(
        &mut self,
        sample1: &[f64],
        sample2: &[f64],
        config: &BootstrapConfig,
    ) -> Result<ComparisonResult, BootstrapError> {
        comparison::compare_statistics(sample1, sample2, config, &mut self.rng)
    }
}
