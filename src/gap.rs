//! Transmission across a zone gap.
//!
//! All rings are concatenated, split at `len / 2` and the two halves pulled
//! apart along z. The re-joined points are flattened row-major and handed
//! to a [`ResonancePass`]; its persistence is the bridge strength.

use log::debug;

use crate::error::{Result, SimError};
use crate::geometry::{flatten_zones, Point3, ZonePointSet};
use crate::resonance::ResonancePass;

/// Split the concatenated rings and displace the halves.
///
/// The upper half is `points[..len/2]` and moves up by `pull_distance`; the
/// lower half takes the remainder (one extra point for odd counts) and moves
/// down. Upper comes first in the result.
pub fn pull_apart(zones: &[ZonePointSet], pull_distance: f64) -> Vec<Point3> {
    let mut points = flatten_zones(zones);
    let mid = points.len() / 2;
    let (upper, lower) = points.split_at_mut(mid);
    debug!(
        "gap split: {} upper / {} lower, pull {}",
        upper.len(),
        lower.len(),
        pull_distance
    );
    for p in upper.iter_mut() {
        p.z += pull_distance;
    }
    for p in lower.iter_mut() {
        p.z -= pull_distance;
    }
    points
}

/// Row-major flatten: `x0, y0, z0, x1, ...`.
pub fn flatten_row(points: &[Point3]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}

/// Bridge strength after pulling the zone set apart by `pull_distance`.
///
/// The pass must report a persistence in `[0, 1]`; anything else, NaN
/// included, is a [`SimError::Numerical`].
pub fn bridge_strength<P: ResonancePass + ?Sized>(
    zones: &[ZonePointSet],
    pull_distance: f64,
    pass: &P,
) -> Result<f64> {
    if zones.is_empty() {
        return Err(SimError::NoZones);
    }
    if !pull_distance.is_finite() {
        return Err(SimError::config(format!(
            "pull_distance must be finite, got {}",
            pull_distance
        )));
    }

    let row = flatten_row(&pull_apart(zones, pull_distance));
    let output = pass.dual_pass(&row);
    if !(0.0..=1.0).contains(&output.persistence) {
        return Err(SimError::numerical(format!(
            "resonance pass returned persistence {} outside [0, 1]",
            output.persistence
        )));
    }
    debug!(
        "bridge over {} values: persistence={:.4} extra={:.4}",
        row.len(),
        output.persistence,
        output.extra
    );
    Ok(output.persistence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate;
    use crate::resonance::{DualPassResonance, ResonanceOutput};

    #[test]
    fn halves_move_in_opposite_directions() {
        let zones = generate(2, 1.0, 4);
        let moved = pull_apart(&zones, 1.5);
        assert_eq!(moved.len(), 8);
        // First four points were zone 0 (z = 0), last four zone 1 (z = 1)
        assert!(moved[..4].iter().all(|p| p.z == 1.5));
        assert!(moved[4..].iter().all(|p| p.z == -0.5));
    }

    #[test]
    fn odd_count_gives_lower_half_the_extra_point() {
        let zones = generate(1, 1.0, 5);
        let moved = pull_apart(&zones, 1.0);
        let up = moved.iter().filter(|p| p.z == 1.0).count();
        let down = moved.iter().filter(|p| p.z == -1.0).count();
        assert_eq!((up, down), (2, 3));
    }

    #[test]
    fn flatten_is_row_major() {
        let row = flatten_row(&[Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]);
        assert_eq!(row, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn zero_pull_matches_direct_pass() {
        let zones = generate(4, 1.0, 50);
        let pass = DualPassResonance::default();
        let direct = pass.dual_pass(&flatten_row(&flatten_zones(&zones))).persistence;
        let bridged = bridge_strength(&zones, 0.0, &pass).unwrap();
        assert_eq!(bridged, direct);
    }

    #[test]
    fn pass_receives_the_shifted_row() {
        let zones = generate(2, 1.0, 2);
        let capture = |row: &[f64]| {
            assert_eq!(row.len(), 12);
            // Upper half: zone 0 points, z = 0 + 2
            assert_eq!(row[2], 2.0);
            assert_eq!(row[5], 2.0);
            // Lower half: zone 1 points, z = 1 - 2
            assert_eq!(row[8], -1.0);
            assert_eq!(row[11], -1.0);
            ResonanceOutput {
                etched: row.to_vec(),
                persistence: 0.25,
                extra: 0.0,
            }
        };
        assert_eq!(bridge_strength(&zones, 2.0, &capture).unwrap(), 0.25);
    }

    #[test]
    fn bridge_strength_is_bounded() {
        let zones = generate(4, 1.0, 50);
        let pass = DualPassResonance::default();
        for pull in [0.0, 0.5, 1.0, 2.0, 5.0] {
            let b = bridge_strength(&zones, pull, &pass).unwrap();
            assert!((0.0..=1.0).contains(&b), "pull {} gave {}", pull, b);
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        let pass = DualPassResonance::default();
        assert!(matches!(bridge_strength(&[], 1.0, &pass), Err(SimError::NoZones)));
        let zones = generate(1, 1.0, 4);
        assert!(bridge_strength(&zones, f64::NAN, &pass).is_err());
        let broken = |_: &[f64]| ResonanceOutput {
            etched: Vec::new(),
            persistence: f64::NAN,
            extra: 0.0,
        };
        assert!(matches!(
            bridge_strength(&zones, 1.0, &broken),
            Err(SimError::Numerical(_))
        ));
    }

    #[test]
    fn persistence_outside_unit_interval_is_rejected() {
        let zones = generate(2, 1.0, 4);
        let reporting = |persistence: f64| {
            move |row: &[f64]| ResonanceOutput {
                etched: row.to_vec(),
                persistence,
                extra: 0.0,
            }
        };
        for bad in [5.0, 1.0 + 1e-9, -0.1, f64::INFINITY] {
            assert!(
                matches!(
                    bridge_strength(&zones, 1.0, &reporting(bad)),
                    Err(SimError::Numerical(_))
                ),
                "accepted persistence {}",
                bad
            );
        }
        assert_eq!(bridge_strength(&zones, 1.0, &reporting(0.0)).unwrap(), 0.0);
        assert_eq!(bridge_strength(&zones, 1.0, &reporting(1.0)).unwrap(), 1.0);
    }
}
