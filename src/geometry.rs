//! Nested ring geometry.
//!
//! Zone `i` is a ring of `samples` points in the plane `z = i` with radius
//! `base_radius / (i+1)`. Zone 0 is therefore the *largest* ring. Downstream
//! weighting keys off the zone index, never the radius, so the literal
//! `1/(i+1)` scale is kept even though the narrative calls low indices
//! "outer".

use std::f64::consts::TAU;

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the z axis.
    pub fn radial_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// The sampled ring belonging to one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePointSet {
    /// Zone index (also the ring's z level).
    pub index: usize,
    pub points: Vec<Point3>,
}

impl ZonePointSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ring radius, measured from the first sample.
    pub fn radius(&self) -> Option<f64> {
        self.points.first().map(Point3::radial_distance)
    }

    /// x coordinates in sample order.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }
}

/// `samples` evenly spaced values over `[start, stop]`, both endpoints
/// included. A single sample yields `start`.
pub fn linspace(start: f64, stop: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
            // Pin the endpoint so accumulated rounding never misses it.
            out[n - 1] = stop;
            out
        }
    }
}

/// Generate the nested ring point-sets.
///
/// Returns exactly `zones` rings of `samples` points each; `zones == 0`
/// yields an empty collection.
pub fn generate(zones: usize, base_radius: f64, samples: usize) -> Vec<ZonePointSet> {
    let angles = linspace(0.0, TAU, samples);
    (0..zones)
        .map(|i| {
            let r = base_radius / (i + 1) as f64;
            let z = i as f64;
            let points = angles
                .iter()
                .map(|&theta| Point3::new(r * theta.cos(), r * theta.sin(), z))
                .collect();
            ZonePointSet { index: i, points }
        })
        .collect()
}

/// Concatenate every ring, in zone order, into one point list.
pub fn flatten_zones(zones: &[ZonePointSet]) -> Vec<Point3> {
    zones.iter().flat_map(|z| z.points.iter().copied()).collect()
}
