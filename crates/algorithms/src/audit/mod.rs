//! Structural validation of candidate curve parameters
//!
//! A candidate is a raw tuple (a, b, p, G, n, h) proposed by an outer search.
//! Most candidates are unsound, so rejection is the common path and is never
//! reported as an error: [`validate_curve`] answers with a boolean, and
//! [`check_curve`] names the first check that failed.
//!
//! Checks, in order:
//! 1. h ≥ 1, p > 0 and n ≥ 1
//! 2. G has exactly two coordinates and satisfies the curve equation
//! 3. a field/subgroup structure can be built, which needs a witness point
//!    from the generator search
//! 4. the structure's cofactor equals h
//! 5. the curve is non-singular: 4a³ + 27b² ≢ 0 (mod p)
//! 6. the curve is not "anomalous" in the sense p ≠ n. This compares the field
//!    size with the claimed subgroup order, not the Frobenius trace with one.
//! 7. the curve is not supersingular: for prime p ∉ {2, 3},
//!    (p + 1 − n) mod p ≠ 0
//!
//! All checks are independent necessary conditions; the order only affects
//! how early a candidate is discarded.

mod subgroup;

pub use subgroup::SubgroupStructure;

use crate::ec::EcPoint;
use crate::field::reduce_signed;
use crate::prime::MillerRabin;
use core::fmt;
use curvefit_api::PrimalityOracle;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// The reason a candidate was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// h < 1
    Cofactor,
    /// p ≤ 0
    Modulus,
    /// n < 1
    SubgroupOrder,
    /// G does not have exactly two coordinates
    MalformedGenerator,
    /// G does not satisfy y² = x³ + ax + b (mod p)
    GeneratorOffCurve,
    /// No field structure could be built: composite p, or no point with a
    /// nonzero square right-hand side exists
    NoWitnessPoint,
    /// The structure's cofactor differs from h. The structure records h as
    /// supplied, so the validator never reports this today.
    CofactorMismatch,
    /// 4a³ + 27b² ≡ 0 (mod p)
    Singular,
    /// p = n
    Anomalous,
    /// (p + 1 − n) ≡ 0 (mod p) for prime p ∉ {2, 3}
    Supersingular,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Cofactor => "cofactor below one",
            Rejection::Modulus => "non-positive field modulus",
            Rejection::SubgroupOrder => "subgroup order below one",
            Rejection::MalformedGenerator => "generator is not a two-coordinate point",
            Rejection::GeneratorOffCurve => "generator does not lie on the curve",
            Rejection::NoWitnessPoint => "no field structure could be constructed",
            Rejection::CofactorMismatch => "cofactor disagrees with the field structure",
            Rejection::Singular => "curve is singular",
            Rejection::Anomalous => "field size equals subgroup order",
            Rejection::Supersingular => "curve is supersingular",
        };
        f.write_str(reason)
    }
}

/// Structural validator with an injected primality oracle.
///
/// Holds no state besides the oracle, so a shared validator can check
/// independent candidates from several threads when `O: Sync`.
#[derive(Debug, Clone, Default)]
pub struct CurveValidator<O = MillerRabin> {
    oracle: O,
}

impl<O: PrimalityOracle> CurveValidator<O> {
    /// Create a validator backed by `oracle`
    pub fn new(oracle: O) -> Self {
        CurveValidator { oracle }
    }

    /// The primality oracle in use
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Pure predicate: `true` iff every structural check passes
    pub fn validate(
        &self,
        a: &BigInt,
        b: &BigInt,
        p: &BigInt,
        g: &[BigInt],
        n: &BigInt,
        h: &BigInt,
    ) -> bool {
        self.check(a, b, p, g, n, h).is_ok()
    }

    /// Run the checks and report the first failure
    pub fn check(
        &self,
        a: &BigInt,
        b: &BigInt,
        p: &BigInt,
        g: &[BigInt],
        n: &BigInt,
        h: &BigInt,
    ) -> Result<(), Rejection> {
        self.run_checks(a, b, p, g, n, h).map_err(|rejection| {
            log::debug!("candidate rejected (p = {}, n = {}): {}", p, n, rejection);
            rejection
        })
    }

    fn run_checks(
        &self,
        a: &BigInt,
        b: &BigInt,
        p: &BigInt,
        g: &[BigInt],
        n: &BigInt,
        h: &BigInt,
    ) -> Result<(), Rejection> {
        if *h < BigInt::one() {
            return Err(Rejection::Cofactor);
        }
        if !p.is_positive() {
            return Err(Rejection::Modulus);
        }
        if *n < BigInt::one() {
            return Err(Rejection::SubgroupOrder);
        }

        let (x, y) = match g {
            [x, y] => (x, y),
            _ => return Err(Rejection::MalformedGenerator),
        };
        if !satisfies_curve_equation(a, b, p, x, y) {
            return Err(Rejection::GeneratorOffCurve);
        }

        // Everything is positive from here on
        let p = p.magnitude();
        let n = n.magnitude();
        let h = h.magnitude();
        let a = reduce_signed(a, p);
        let b = reduce_signed(b, p);
        let generator = EcPoint::new(reduce_signed(x, p), reduce_signed(y, p));

        let structure = SubgroupStructure::construct(
            &a,
            &b,
            p,
            generator,
            n.clone(),
            h.clone(),
            &self.oracle,
        )
        .map_err(|err| {
            log::debug!("field structure construction failed: {}", err);
            Rejection::NoWitnessPoint
        })?;

        log::trace!(
            "structure for G = {} over p = {} has witness {}",
            structure.generator(),
            structure.modulus(),
            structure.witness()
        );

        if structure.cofactor() != h {
            return Err(Rejection::CofactorMismatch);
        }
        if is_singular(&a, &b, structure.modulus()) {
            return Err(Rejection::Singular);
        }
        if is_anomalous(structure.modulus(), structure.order()) {
            return Err(Rejection::Anomalous);
        }
        // the structure only exists over a prime modulus
        if structure.is_supersingular() {
            return Err(Rejection::Supersingular);
        }
        Ok(())
    }
}

/// Validate a candidate with the default Miller-Rabin oracle
pub fn validate_curve(
    a: &BigInt,
    b: &BigInt,
    p: &BigInt,
    g: &[BigInt],
    n: &BigInt,
    h: &BigInt,
) -> bool {
    CurveValidator::<MillerRabin>::default().validate(a, b, p, g, n, h)
}

/// Check a candidate with the default Miller-Rabin oracle, naming the
/// first failed check
pub fn check_curve(
    a: &BigInt,
    b: &BigInt,
    p: &BigInt,
    g: &[BigInt],
    n: &BigInt,
    h: &BigInt,
) -> Result<(), Rejection> {
    CurveValidator::<MillerRabin>::default().check(a, b, p, g, n, h)
}

/// y² − x³ − ax − b ≡ 0 (mod p), with floor modulus on signed inputs.
/// `p` must be nonzero.
pub fn satisfies_curve_equation(
    a: &BigInt,
    b: &BigInt,
    p: &BigInt,
    x: &BigInt,
    y: &BigInt,
) -> bool {
    let residue = y * y - x * x * x - a * x - b;
    residue.mod_floor(p).is_zero()
}

/// 4a³ + 27b² ≡ 0 (mod p)
pub fn is_singular(a: &BigUint, b: &BigUint, p: &BigUint) -> bool {
    let discriminant = BigUint::from(4u32) * a * a * a + BigUint::from(27u32) * b * b;
    (discriminant % p).is_zero()
}

/// p = n: the field size equals the claimed subgroup order
pub fn is_anomalous(p: &BigUint, n: &BigUint) -> bool {
    p == n
}

/// For prime p ∉ {2, 3}: the trace p + 1 − n is divisible by p
pub fn is_supersingular<O: PrimalityOracle>(p: &BigUint, n: &BigUint, oracle: &O) -> bool {
    oracle.is_prime(p) && trace_vanishes(p, n)
}

/// (p + 1 − n) ≡ 0 (mod p) for p ∉ {2, 3}; primality of p is the caller's
/// concern
pub(crate) fn trace_vanishes(p: &BigUint, n: &BigUint) -> bool {
    if *p == BigUint::from(2u32) || *p == BigUint::from(3u32) {
        return false;
    }
    let modulus = BigInt::from(p.clone());
    let trace = &modulus + 1u32 - BigInt::from(n.clone());
    trace.mod_floor(&modulus).is_zero()
}
