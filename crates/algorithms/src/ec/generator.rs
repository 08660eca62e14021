//! Deterministic generator-point search

use super::point::EcPoint;
use crate::error::{Error, Result};
use crate::field::{add_mod, legendre_symbol, mul_mod, try_mod_sqrt};
use num_bigint::BigUint;
use num_traits::Zero;

/// Find the point with the smallest x on y² = x³ + ax + b over 𝔽ₚ.
///
/// Scans x = 0, 1, 2, … and returns (x, y) for the first x whose right-hand
/// side is a nonzero quadratic residue, with y from the modular square root.
/// Points with y = 0 are skipped. Fails with [`Error::NoGeneratorFound`] once
/// `[0, p)` is exhausted, and with [`Error::CompositeModulus`] if the square
/// root reveals that `p` is not prime.
pub fn find_generator_point(a: &BigUint, b: &BigUint, p: &BigUint) -> Result<EcPoint> {
    if p.is_zero() {
        return Err(Error::NoGeneratorFound {
            context: "find_generator_point",
        });
    }

    let a = a % p;
    let b = b % p;
    let mut x = BigUint::zero();
    while x < *p {
        let x3 = mul_mod(&mul_mod(&x, &x, p), &x, p);
        let rhs = add_mod(&add_mod(&x3, &mul_mod(&a, &x, p), p), &b, p);
        if legendre_symbol(&rhs, p) == 1 {
            let y = try_mod_sqrt(&rhs, p)?;
            log::trace!("generator search hit at x = {}", x);
            return Ok(EcPoint::Affine { x, y });
        }
        x += 1u32;
    }

    Err(Error::NoGeneratorFound {
        context: "find_generator_point",
    })
}
