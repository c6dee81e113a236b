//! # dilation-nest-sim
//!
//! Exploratory simulation of nested "time-dilation" zones: concentric
//! rings stacked along z, each given an asymmetric signal transform.
//! Outer rings (low index) get a strong fast kick, inner rings (high
//! index) a heavy pruning moat.
//!
//! ```text
//! ZoneGeometry ──► DilationPulse    (persistence, reclaimed)
//!      │
//!      ├────────► GapTransmission  (bridge strength via ResonancePass)
//!      │
//!      └────────► Renderer         (external consumer)
//!
//! PrimalityOracle ──► PressureAnchor (Mersenne-gated anchor strength)
//! ```
//!
//! The photon/electron vocabulary is narrative only. Every computation is
//! a plain elementwise transform over ring coordinates, plus one Gaussian
//! noise term drawn from an injected [`noise::NoiseSource`].
//!
//! ## Usage
//!
//! ```no_run
//! use dilation_nest_sim::prelude::*;
//!
//! let config = SimulatorConfig::default().with_zones(4);
//! let sim = DilationNestSimulator::new(config)?
//!     .with_resonance(DualPassResonance::default());
//!
//! let mut noise = GaussianNoise::seeded(7);
//! let metrics = sim.em_dilation_pulse(&mut noise)?;
//! println!("persistence {:.4}, reclaimed {:.4}", metrics.persistence, metrics.reclaimed);
//!
//! let bridge = sim.transmission_across_gap(2.0)?;
//! println!("bridge {:.4}", bridge);
//! # Ok::<(), SimError>(())
//! ```

pub mod error;
pub mod config;
pub mod geometry;
pub mod primality;
pub mod anchor;
pub mod noise;
pub mod pulse;
pub mod resonance;
pub mod gap;
pub mod render;
pub mod simulator;

pub use error::{Result, SimError};

pub mod prelude {
    pub use crate::anchor::*;
    pub use crate::config::*;
    pub use crate::error::{Result, SimError};
    pub use crate::gap::*;
    pub use crate::geometry::*;
    pub use crate::noise::*;
    pub use crate::primality::*;
    pub use crate::pulse::*;
    pub use crate::render::*;
    pub use crate::resonance::*;
    pub use crate::simulator::*;
}
