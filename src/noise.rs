//! Injectable noise sources for the bloom step of the dilation pulse.
//!
//! The pulse never touches ambient random state. Production callers hand
//! in a [`GaussianNoise`] seeded from entropy; tests pin it with a seed or
//! swap in a deterministic source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// A stream of standard-normal samples.
pub trait NoiseSource {
    /// Next N(0, 1) draw.
    fn standard_normal(&mut self) -> f64;
}

/// Gaussian noise backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct GaussianNoise<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> GaussianNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl GaussianNoise<StdRng> {
    /// Fresh entropy per instance.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}

/// Always returns `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ReplayNoise {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplayNoise {
    /// An empty sequence behaves like [`ZeroNoise`].
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl NoiseSource for ReplayNoise {
    fn standard_normal(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }
}
