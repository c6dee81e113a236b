//! Perfect-number pressure anchors.
//!
//! An exponent `p` anchors only when `2^p - 1` is a Mersenne prime, in which
//! case `2^(p-1)·(2^p - 1)` is an even perfect number. Anchored exponents map
//! to a strength in `[0.95, 1.0]`; every other exponent is pruned to `0.0`.

use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Result, SimError};
use crate::primality::{is_mersenne_prime, mersenne};

/// Strength floor for an anchored exponent.
const ANCHOR_BASE: f64 = 0.95;
/// Strength gained per 100 units of exponent.
const ANCHOR_SLOPE: f64 = 0.05;

/// Largest accepted anchor exponent. Lucas–Lehmer costs `p` big-integer
/// squarings of `p`-bit numbers, so the gate is bounded here.
pub const MAX_ANCHOR_EXPONENT: u32 = 127;

/// A confirmed Mersenne / perfect-number pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfectAnchor {
    pub exponent: u32,
    /// `2^exponent - 1`
    pub mersenne_prime: BigUint,
    /// `2^(exponent-1) · (2^exponent - 1)`
    pub perfect_number: BigUint,
    pub strength: f64,
}

fn strength_for(exponent: u32) -> f64 {
    ANCHOR_BASE + ANCHOR_SLOPE * (exponent as f64 / 100.0)
}

/// Build the anchor record for `exponent`, or `None` when the Mersenne
/// candidate is composite.
///
/// Exponents outside `1..=MAX_ANCHOR_EXPONENT` are rejected.
pub fn perfect_anchor(exponent: u32) -> Result<Option<PerfectAnchor>> {
    if exponent == 0 || exponent > MAX_ANCHOR_EXPONENT {
        return Err(SimError::InvalidExponent(exponent));
    }
    if !is_mersenne_prime(exponent) {
        debug!("exponent {} pruned: 2^{} - 1 is composite", exponent, exponent);
        return Ok(None);
    }
    let mersenne_prime = mersenne(exponent);
    let perfect_number = (BigUint::one() << (exponent - 1) as usize) * &mersenne_prime;
    Ok(Some(PerfectAnchor {
        exponent,
        mersenne_prime,
        perfect_number,
        strength: strength_for(exponent),
    }))
}

/// Anchor strength for `exponent`: `0.95 + 0.05·(exponent/100)` when
/// `2^exponent - 1` is prime, exactly `0.0` otherwise.
pub fn anchor_strength(exponent: u32) -> Result<f64> {
    Ok(perfect_anchor(exponent)?.map_or(0.0, |a| a.strength))
}

/// All anchored exponents in `range`, in ascending order.
pub fn scan_anchors(range: std::ops::RangeInclusive<u32>) -> Result<Vec<PerfectAnchor>> {
    if *range.end() > MAX_ANCHOR_EXPONENT && !range.is_empty() {
        return Err(SimError::InvalidExponent(*range.end()));
    }
    if *range.start() == 0 {
        warn!("anchor scan starting at 0; skipping the invalid exponent");
    }
    let mut anchors = Vec::new();
    for exponent in range.filter(|&e| e > 0) {
        if let Some(anchor) = perfect_anchor(exponent)? {
            anchors.push(anchor);
        }
    }
    Ok(anchors)
}
