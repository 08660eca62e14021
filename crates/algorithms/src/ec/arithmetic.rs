//! Affine group law: addition, doubling, negation, scalar multiplication

use super::{params::CurveParameters, point::EcPoint};
use crate::error::{Error, PointResult};
use crate::field::{add_mod, inv_mod, mul_mod, neg_mod, sub_mod};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Add two points (group law)
///
/// Total over finite points and the identity. Fails with
/// [`Error::NotInvertible`] only when a slope denominator vanishes, which
/// cannot happen for two points that lie on the curve.
pub fn add(lhs: &EcPoint, rhs: &EcPoint, params: &CurveParameters) -> PointResult<EcPoint> {
    // Handle identity cases
    let (x1, y1) = match lhs.coordinates() {
        None => return Ok(rhs.clone()),
        Some(c) => c,
    };
    let (x2, y2) = match rhs.coordinates() {
        None => return Ok(lhs.clone()),
        Some(c) => c,
    };

    let p = params.p();
    let (x1, y1, x2, y2) = (x1 % p, y1 % p, x2 % p, y2 % p);

    // P + (−P) = O; this also sends points of order two to O when doubled
    if x1 == x2 && add_mod(&y1, &y2, p).is_zero() {
        return Ok(EcPoint::Infinity);
    }

    let slope = if x1 == x2 && y1 == y2 {
        // Tangent: (3x² + a) / 2y
        let numerator = add_mod(
            &mul_mod(&BigUint::from(3u32), &mul_mod(&x1, &x1, p), p),
            params.a(),
            p,
        );
        let inverse = inv_mod(&add_mod(&y1, &y1, p), p)
            .ok_or(Error::NotInvertible { context: "ec::double" })?;
        mul_mod(&numerator, &inverse, p)
    } else {
        // Chord: (y₂ − y₁) / (x₂ − x₁)
        let inverse = inv_mod(&sub_mod(&x2, &x1, p), p)
            .ok_or(Error::NotInvertible { context: "ec::add" })?;
        mul_mod(&sub_mod(&y2, &y1, p), &inverse, p)
    };

    // x₃ = m² − x₁ − x₂,  y₃ = m·(x₁ − x₃) − y₁
    let x3 = sub_mod(&sub_mod(&mul_mod(&slope, &slope, p), &x1, p), &x2, p);
    let y3 = sub_mod(&mul_mod(&slope, &sub_mod(&x1, &x3, p), p), &y1, p);

    Ok(EcPoint::Affine { x: x3, y: y3 })
}

/// Double a point: 2P
pub fn double(point: &EcPoint, params: &CurveParameters) -> PointResult<EcPoint> {
    add(point, point, params)
}

/// Negate a point: −(x, y) = (x, −y)
pub fn negate(point: &EcPoint, params: &CurveParameters) -> EcPoint {
    match point.coordinates() {
        None => EcPoint::Infinity,
        Some((x, y)) => {
            let p = params.p();
            EcPoint::Affine {
                x: x % p,
                y: neg_mod(y, p),
            }
        }
    }
}

/// Scalar multiplication: k·P
///
/// Double-and-add over the bits of `k`, least significant first. `k = 0`
/// yields the identity. Variable time.
pub fn scalar_mul(point: &EcPoint, k: &BigUint, params: &CurveParameters) -> PointResult<EcPoint> {
    let mut result = EcPoint::Infinity;
    let mut current = point.clone();
    let mut k = k.clone();

    while !k.is_zero() {
        if k.is_odd() {
            result = add(&result, &current, params)?;
        }
        current = double(&current, params)?;
        k >>= 1u32;
    }

    Ok(result)
}
