//! Deterministic primality checks.
//!
//! `is_prime` is a Miller–Rabin test with the first twelve prime bases,
//! which is exact for every `u64`. Products go through `u128` so nothing
//! overflows. Mersenne candidates too large for `u64` fall back to the
//! Lucas–Lehmer test over `BigUint`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Bases that make Miller–Rabin deterministic below 3.3·10^24.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1u64 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Exact primality test for any `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d · 2^s with d odd
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// The Mersenne number `2^exponent - 1`.
pub fn mersenne(exponent: u32) -> BigUint {
    (BigUint::one() << exponent as usize) - BigUint::one()
}

/// Lucas–Lehmer test: `2^p - 1` is prime iff `s_{p-2} ≡ 0 (mod 2^p - 1)`
/// with `s_0 = 4`, `s_{k+1} = s_k² - 2`. Valid for odd prime `p`; the
/// caller handles `p == 2` and composite `p`.
fn lucas_lehmer(p: u32) -> bool {
    let m = mersenne(p);
    let two = BigUint::from(2u32);
    let mut s = BigUint::from(4u32);
    for _ in 0..p - 2 {
        // s² ≥ 16 > 2, so the subtraction never underflows before the reduction.
        s = (&s * &s + &m - &two) % &m;
    }
    s.is_zero()
}

/// Whether `2^exponent - 1` is prime.
///
/// Uses `is_prime` while the candidate fits in `u64` (exponent ≤ 63) and
/// Lucas–Lehmer beyond that. Lucas–Lehmer runs `exponent - 2` squarings of
/// `exponent`-bit numbers, so large prime exponents get slow quickly;
/// callers that take exponents from input should bound them (the anchor
/// does, see `anchor::MAX_ANCHOR_EXPONENT`).
pub fn is_mersenne_prime(exponent: u32) -> bool {
    if exponent < 2 {
        return false;
    }
    if exponent <= 63 {
        return is_prime((1u64 << exponent) - 1);
    }
    // 2^ab - 1 is divisible by 2^a - 1, so a composite exponent is never prime.
    if !is_prime(exponent as u64) {
        return false;
    }
    lucas_lehmer(exponent)
}
