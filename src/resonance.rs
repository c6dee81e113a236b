//! Resonance pass collaborator used by gap transmission.
//!
//! A resonance pass takes a flat numeric row and returns an etched row, a
//! persistence scalar on the same `[0, 1]` scale as the dilation pulse,
//! and one extra diagnostic. Anything matching
//! `Fn(&[f64]) -> ResonanceOutput` is a pass, so callers can inject their
//! own transform.

use crate::error::{Result, SimError};

/// Output of a resonance pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResonanceOutput {
    pub etched: Vec<f64>,
    /// Fraction of entries surviving the pass.
    pub persistence: f64,
    /// Pass-specific extra value. [`DualPassResonance`] reports reclaimed
    /// magnitude here.
    pub extra: f64,
}

/// A two-stage transform over a flattened row.
pub trait ResonancePass {
    fn dual_pass(&self, row: &[f64]) -> ResonanceOutput;
}

impl<F> ResonancePass for F
where
    F: Fn(&[f64]) -> ResonanceOutput,
{
    fn dual_pass(&self, row: &[f64]) -> ResonanceOutput {
        self(row)
    }
}

/// Forward then backward exponential smoothing, followed by the same
/// `cos(v²)` etch and threshold prune the dilation pulse uses.
///
/// Forward: `f[0] = row[0]`, `f[k] = α·row[k] + (1-α)·f[k-1]`.
/// Backward over `f`: `b[n-1] = f[n-1]`, `b[k] = α·f[k] + (1-α)·b[k+1]`.
/// Etched `e = cos(b²)`, zeroed where `|e| < threshold`; persistence counts
/// `|e| > threshold`; extra sums `|b|` over zeroed entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPassResonance {
    smoothing: f64,
    threshold: f64,
}

impl Default for DualPassResonance {
    fn default() -> Self {
        Self {
            smoothing: 0.5,
            threshold: 0.5,
        }
    }
}

impl DualPassResonance {
    /// `smoothing` must lie in `(0, 1]`, `threshold` in `[0, 1)`.
    pub fn new(smoothing: f64, threshold: f64) -> Result<Self> {
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(SimError::config(format!(
                "resonance smoothing must be in (0, 1], got {}",
                smoothing
            )));
        }
        if !(0.0..1.0).contains(&threshold) {
            return Err(SimError::config(format!(
                "resonance threshold must be in [0, 1), got {}",
                threshold
            )));
        }
        Ok(Self {
            smoothing,
            threshold,
        })
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn forward(&self, row: &[f64]) -> Vec<f64> {
        let a = self.smoothing;
        let mut out = Vec::with_capacity(row.len());
        let mut acc = match row.first() {
            Some(&v) => v,
            None => return out,
        };
        for &v in row {
            acc = a * v + (1.0 - a) * acc;
            out.push(acc);
        }
        out
    }

    fn backward(&self, row: &[f64]) -> Vec<f64> {
        let a = self.smoothing;
        let mut out = vec![0.0; row.len()];
        let mut acc = match row.last() {
            Some(&v) => v,
            None => return out,
        };
        for (k, &v) in row.iter().enumerate().rev() {
            acc = a * v + (1.0 - a) * acc;
            out[k] = acc;
        }
        out
    }
}

impl ResonancePass for DualPassResonance {
    fn dual_pass(&self, row: &[f64]) -> ResonanceOutput {
        let smoothed = self.backward(&self.forward(row));

        let mut etched = Vec::with_capacity(smoothed.len());
        let mut surviving = 0usize;
        let mut reclaimed = 0.0;
        for &v in &smoothed {
            let mut e = (v * v).cos();
            if e.abs() < self.threshold {
                e = 0.0;
                reclaimed += v.abs();
            }
            if e.abs() > self.threshold {
                surviving += 1;
            }
            etched.push(e);
        }

        let persistence = if smoothed.is_empty() {
            0.0
        } else {
            surviving as f64 / smoothed.len() as f64
        };

        ResonanceOutput {
            etched,
            persistence,
            extra: reclaimed,
        }
    }
}
