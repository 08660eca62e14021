//! Arithmetic in the prime field ℤ/pℤ
//!
//! Field elements are plain `BigUint`s kept in `[0, p)`; the modulus travels
//! alongside them rather than being baked into a type, since curve candidates
//! arrive with arbitrary runtime moduli.

mod residue;

pub use residue::{legendre_symbol, mod_sqrt, try_mod_sqrt};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

/// Reduce a signed integer into `[0, p)` using floor division, so that
/// `reduce_signed(-1, 23) == 22`.
pub fn reduce_signed(value: &BigInt, p: &BigUint) -> BigUint {
    let modulus = BigInt::from_biguint(Sign::Plus, p.clone());
    // mod_floor with a positive modulus is never negative
    value.mod_floor(&modulus).magnitude().clone()
}

/// `(a + b) mod p`
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// `(a - b) mod p`
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    let b = b % p;
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// `(a · b) mod p`
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// `-a mod p`
#[inline]
pub fn neg_mod(a: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    if a.is_zero() {
        a
    } else {
        p - a
    }
}

/// Multiplicative inverse of `a` modulo `p`, or `None` when `a ≡ 0`
/// (or, for composite `p`, shares a factor with it).
#[inline]
pub fn inv_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    (a % p).modinv(p)
}
