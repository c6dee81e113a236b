//! `DilationNestSimulator`: configuration plus collaborators in one place.

use log::info;

use crate::anchor::anchor_strength;
use crate::config::SimulatorConfig;
use crate::error::{Result, SimError};
use crate::gap::bridge_strength;
use crate::geometry::{generate, ZonePointSet};
use crate::noise::NoiseSource;
use crate::pulse::{DilationMetrics, DilationPulse};
use crate::render::{zone_displays, RenderTarget, Renderer};
use crate::resonance::ResonancePass;

/// Validated configuration with an optional resonance pass.
///
/// Every call regenerates the ring geometry; the simulator holds no
/// mutable state between calls.
pub struct DilationNestSimulator {
    config: SimulatorConfig,
    resonance: Option<Box<dyn ResonancePass>>,
}

impl std::fmt::Debug for DilationNestSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DilationNestSimulator")
            .field("config", &self.config)
            .field("resonance", &self.resonance.is_some())
            .finish()
    }
}

impl DilationNestSimulator {
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "simulator: {} zones, radius {}, {} samples",
            config.zones, config.base_radius, config.samples
        );
        Ok(Self {
            config,
            resonance: None,
        })
    }

    /// Attach the resonance pass used by [`Self::transmission_across_gap`].
    pub fn with_resonance<P: ResonancePass + 'static>(mut self, pass: P) -> Self {
        self.resonance = Some(Box::new(pass));
        self
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn nested_zone_points(&self) -> Vec<ZonePointSet> {
        generate(self.config.zones, self.config.base_radius, self.config.samples)
    }

    /// Dilation pulse at the configured frequency proxy.
    pub fn em_dilation_pulse<N: NoiseSource + ?Sized>(
        &self,
        noise: &mut N,
    ) -> Result<DilationMetrics> {
        self.em_dilation_pulse_at(self.config.freq_proxy, noise)
    }

    /// Dilation pulse at an explicit frequency proxy.
    pub fn em_dilation_pulse_at<N: NoiseSource + ?Sized>(
        &self,
        freq_proxy: f64,
        noise: &mut N,
    ) -> Result<DilationMetrics> {
        DilationPulse::new(freq_proxy, self.config.noise_scale)?
            .compute(&self.nested_zone_points(), noise)
    }

    pub fn perfect_pressure_anchor(&self, exponent: u32) -> Result<f64> {
        anchor_strength(exponent)
    }

    /// Bridge strength through the attached resonance pass.
    pub fn transmission_across_gap(&self, pull_distance: f64) -> Result<f64> {
        let pass = self
            .resonance
            .as_deref()
            .ok_or(SimError::MissingResonancePass)?;
        bridge_strength(&self.nested_zone_points(), pull_distance, pass)
    }

    /// Hand the rings and their display metadata to `renderer`.
    pub fn visualize<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        target: &RenderTarget,
    ) -> Result<()> {
        let zones = self.nested_zone_points();
        renderer.render(&zones, &zone_displays(zones.len()), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ZonePointSet;
    use crate::noise::ZeroNoise;
    use crate::render::ZoneDisplay;
    use crate::resonance::DualPassResonance;

    #[test]
    fn rejects_invalid_config() {
        let err = DilationNestSimulator::new(SimulatorConfig::default().with_zones(0));
        assert!(matches!(err, Err(SimError::NoZones)));
    }

    #[test]
    fn missing_resonance_pass_is_an_error() {
        let sim = DilationNestSimulator::new(SimulatorConfig::default()).unwrap();
        assert!(matches!(
            sim.transmission_across_gap(1.0),
            Err(SimError::MissingResonancePass)
        ));
    }

    #[test]
    fn attached_pass_is_used() {
        let sim = DilationNestSimulator::new(SimulatorConfig::default().with_zones(4))
            .unwrap()
            .with_resonance(DualPassResonance::default());
        let b = sim.transmission_across_gap(2.0).unwrap();
        assert!((0.0..=1.0).contains(&b));
    }

    #[test]
    fn config_is_kept_as_given() {
        let config = SimulatorConfig::default()
            .with_zones(6)
            .with_samples(9)
            .with_noise_scale(0.1);
        let sim = DilationNestSimulator::new(config.clone()).unwrap();
        assert_eq!(sim.config(), &config);
        assert_eq!(sim.nested_zone_points().len(), sim.config().zones);
    }

    #[test]
    fn explicit_frequency_must_be_finite() {
        let sim = DilationNestSimulator::new(SimulatorConfig::default()).unwrap();
        assert!(matches!(
            sim.em_dilation_pulse_at(f64::NAN, &mut ZeroNoise),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn pulse_uses_configured_geometry() {
        let sim = DilationNestSimulator::new(SimulatorConfig::default().with_zones(5)).unwrap();
        let m = sim.em_dilation_pulse(&mut ZeroNoise).unwrap();
        assert_eq!(m.zones.len(), 5);
    }

    #[test]
    fn anchor_passthrough() {
        let sim = DilationNestSimulator::new(SimulatorConfig::default()).unwrap();
        assert!((sim.perfect_pressure_anchor(5).unwrap() - 0.9525).abs() < 1e-12);
        assert_eq!(sim.perfect_pressure_anchor(4).unwrap(), 0.0);
    }

    #[derive(Default)]
    struct Recorder {
        zones: usize,
        labels: Vec<String>,
        target: Option<RenderTarget>,
    }

    impl Renderer for Recorder {
        fn render(
            &mut self,
            zones: &[ZonePointSet],
            displays: &[ZoneDisplay],
            target: &RenderTarget,
        ) -> Result<()> {
            self.zones = zones.len();
            self.labels = displays.iter().map(|d| d.label.clone()).collect();
            self.target = Some(target.clone());
            Ok(())
        }
    }

    #[test]
    fn visualize_passes_metadata_through() {
        let sim = DilationNestSimulator::new(SimulatorConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        let target = RenderTarget::File("nested_dilation.csv".into());
        sim.visualize(&mut recorder, &target).unwrap();
        assert_eq!(recorder.zones, 3);
        assert_eq!(recorder.labels, vec!["Zone 0", "Zone 1", "Zone 2"]);
        assert_eq!(recorder.target, Some(target));
    }
}
