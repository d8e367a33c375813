use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic resampling.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator behind a [`Bootstrapper`](crate::Bootstrapper). Using the same
/// seed with the same inputs reproduces the same bootstrap distributions,
/// which enables:
///
/// - Reproducible reports (the seed is printed alongside the results)
/// - Deterministic testing
///
/// Seeds are written as 32-character hexadecimal strings, both by
/// [`Display`](fmt::Display) and by serde.
///
/// # Example
///
/// ```
/// use bootcmp_engine::ResampleSeed;
/// use rand::Rng as _;
///
/// let seed: ResampleSeed = rand::rng().random();
/// let parsed: ResampleSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleSeed([u8; 16]);

/// Error returned when parsing a [`ResampleSeed`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected 32 hex characters")]
pub struct SeedParseError {
    #[error(not(source))]
    input: String,
}

impl ResampleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for ResampleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for ResampleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || SeedParseError {
            input: s.to_owned(),
        };
        // from_str_radix accepts a leading '+', which is not a hex digit
        if s.len() != 32 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for ResampleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResampleSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `ResampleSeed` values with `rng.random()`.
impl Distribution<ResampleSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ResampleSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ResampleSeed(seed)
    }
}
