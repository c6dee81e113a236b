//! Simulator parameters.

use crate::error::{Result, SimError};

/// Default number of nested zones.
pub const DEFAULT_ZONES: usize = 3;
/// Default outer ring radius.
pub const DEFAULT_BASE_RADIUS: f64 = 1.0;
/// Default number of angular samples per ring.
pub const DEFAULT_SAMPLES: usize = 50;
/// Default frequency proxy for the photon kick.
pub const DEFAULT_FREQ_PROXY: f64 = 660.0;
/// Default scale applied to each standard-normal noise draw.
pub const DEFAULT_NOISE_SCALE: f64 = 0.5;

/// Immutable parameters for a [`crate::simulator::DilationNestSimulator`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Number of nested zones (rings).
    pub zones: usize,
    /// Radius of zone 0; zone `i` has radius `base_radius / (i+1)`.
    pub base_radius: f64,
    /// Angular samples per ring, endpoints included.
    pub samples: usize,
    /// Frequency proxy used by the photon kick `sin(x·f/100)`.
    pub freq_proxy: f64,
    /// Multiplier on each Gaussian noise draw in the bloom step.
    pub noise_scale: f64,
    /// Deviation constant. Carried for extensions, unused by the metrics.
    pub deviation: f64,
    /// Angular offset (π/3). Carried for extensions, unused by the metrics.
    pub third_offset: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES,
            base_radius: DEFAULT_BASE_RADIUS,
            samples: DEFAULT_SAMPLES,
            freq_proxy: DEFAULT_FREQ_PROXY,
            noise_scale: DEFAULT_NOISE_SCALE,
            deviation: 2.0,
            third_offset: std::f64::consts::FRAC_PI_3,
        }
    }
}

impl SimulatorConfig {
    pub fn with_zones(mut self, zones: usize) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_base_radius(mut self, base_radius: f64) -> Self {
        self.base_radius = base_radius;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_freq_proxy(mut self, freq_proxy: f64) -> Self {
        self.freq_proxy = freq_proxy;
        self
    }

    pub fn with_noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Check every field the metrics depend on.
    pub fn validate(&self) -> Result<()> {
        if self.zones == 0 {
            return Err(SimError::NoZones);
        }
        if !(self.base_radius.is_finite() && self.base_radius > 0.0) {
            return Err(SimError::config(format!(
                "base_radius must be finite and > 0, got {}",
                self.base_radius
            )));
        }
        if self.samples == 0 {
            return Err(SimError::config("samples must be >= 1"));
        }
        if !self.freq_proxy.is_finite() {
            return Err(SimError::config(format!(
                "freq_proxy must be finite, got {}",
                self.freq_proxy
            )));
        }
        if !(self.noise_scale.is_finite() && self.noise_scale >= 0.0) {
            return Err(SimError::config(format!(
                "noise_scale must be finite and >= 0, got {}",
                self.noise_scale
            )));
        }
        Ok(())
    }
}
