//! The EM dilation pulse: persistence and reclaimed energy per zone.
//!
//! For zone `i` of `n`:
//!
//! 1. `photon_amp = (n - i) / n`, strongest at zone 0
//! 2. `kick = sin(x · freq / 100) · photon_amp` from the x coordinate only
//! 3. `electron_prune = (i + 1) / n`, strongest at the last zone
//! 4. `bloom = kick + noise_scale · N(0,1)`, one draw per point
//! 5. `etched = cos(bloom²)`, zeroed where `|etched| < electron_prune`
//! 6. persistence: fraction with `|etched| > electron_prune`
//! 7. reclaimed: `Σ |bloom|` over points whose etched value is zero
//!
//! Steps 5 and 6 use `<` and `>` respectively. A value sitting exactly on
//! the threshold is neither pruned nor persistent, and that boundary is
//! part of the observable metrics.

use log::debug;

use crate::config::{DEFAULT_FREQ_PROXY, DEFAULT_NOISE_SCALE};
use crate::error::{Result, SimError};
use crate::geometry::ZonePointSet;
use crate::noise::NoiseSource;

/// Breakdown for a single zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMetrics {
    pub index: usize,
    pub photon_amp: f64,
    pub electron_prune: f64,
    /// Fraction of points strictly above the prune threshold.
    pub persistence: f64,
    /// Sum of `|bloom|` over pruned points.
    pub reclaimed: f64,
    /// Points whose etched value ended at zero.
    pub pruned: usize,
}

/// Aggregate pulse result.
#[derive(Debug, Clone, PartialEq)]
pub struct DilationMetrics {
    /// Mean of per-zone persistence, in `[0, 1]`.
    pub persistence: f64,
    /// Sum of per-zone reclaimed energy, `>= 0`.
    pub reclaimed: f64,
    pub zones: Vec<ZoneMetrics>,
}

/// Pulse parameters: a finite frequency proxy and a finite, non-negative
/// noise scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilationPulse {
    freq_proxy: f64,
    noise_scale: f64,
}

impl Default for DilationPulse {
    fn default() -> Self {
        Self {
            freq_proxy: DEFAULT_FREQ_PROXY,
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

impl DilationPulse {
    pub fn new(freq_proxy: f64, noise_scale: f64) -> Result<Self> {
        if !freq_proxy.is_finite() {
            return Err(SimError::config(format!(
                "freq_proxy must be finite, got {}",
                freq_proxy
            )));
        }
        if !(noise_scale.is_finite() && noise_scale >= 0.0) {
            return Err(SimError::config(format!(
                "noise_scale must be finite and >= 0, got {}",
                noise_scale
            )));
        }
        Ok(Self {
            freq_proxy,
            noise_scale,
        })
    }

    pub fn freq_proxy(&self) -> f64 {
        self.freq_proxy
    }

    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Run the pulse over every zone, drawing noise in zone then point order.
    pub fn compute<N: NoiseSource + ?Sized>(
        &self,
        zones: &[ZonePointSet],
        noise: &mut N,
    ) -> Result<DilationMetrics> {
        if zones.is_empty() {
            return Err(SimError::NoZones);
        }
        let n = zones.len() as f64;

        let mut breakdown = Vec::with_capacity(zones.len());
        for (i, zone) in zones.iter().enumerate() {
            let photon_amp = (n - i as f64) / n;
            let electron_prune = (i + 1) as f64 / n;
            let metrics = self.zone_pulse(i, zone, photon_amp, electron_prune, noise);
            debug!(
                "zone {}: amp={:.3} prune={:.3} persistence={:.4} reclaimed={:.4} pruned={}/{}",
                i,
                photon_amp,
                electron_prune,
                metrics.persistence,
                metrics.reclaimed,
                metrics.pruned,
                zone.len()
            );
            breakdown.push(metrics);
        }

        let persistence = breakdown.iter().map(|z| z.persistence).sum::<f64>() / n;
        let reclaimed = breakdown.iter().map(|z| z.reclaimed).sum::<f64>();

        Ok(DilationMetrics {
            persistence,
            reclaimed,
            zones: breakdown,
        })
    }

    fn zone_pulse<N: NoiseSource + ?Sized>(
        &self,
        index: usize,
        zone: &ZonePointSet,
        photon_amp: f64,
        electron_prune: f64,
        noise: &mut N,
    ) -> ZoneMetrics {
        let mut persistent = 0usize;
        let mut pruned = 0usize;
        let mut reclaimed = 0.0;

        for x in zone.xs() {
            let kick = (x * self.freq_proxy / 100.0).sin() * photon_amp;
            let bloom = kick + self.noise_scale * noise.standard_normal();
            let mut etched = (bloom * bloom).cos();
            if etched.abs() < electron_prune {
                etched = 0.0;
            }
            if etched.abs() > electron_prune {
                persistent += 1;
            }
            if etched == 0.0 {
                pruned += 1;
                reclaimed += bloom.abs();
            }
        }

        let persistence = if zone.is_empty() {
            0.0
        } else {
            persistent as f64 / zone.len() as f64
        };

        ZoneMetrics {
            index,
            photon_amp,
            electron_prune,
            persistence,
            reclaimed,
            pruned,
        }
    }
}

/// Pulse with the default noise scale.
pub fn em_dilation_pulse<N: NoiseSource + ?Sized>(
    zones: &[ZonePointSet],
    freq_proxy: f64,
    noise: &mut N,
) -> Result<DilationMetrics> {
    DilationPulse::new(freq_proxy, DEFAULT_NOISE_SCALE)?.compute(zones, noise)
}
