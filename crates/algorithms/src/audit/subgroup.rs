//! Field/subgroup structure built while validating a candidate

use crate::ec::{find_generator_point, EcPoint};
use crate::error::{Error, Result, ResultExt};
use curvefit_api::PrimalityOracle;
use num_bigint::BigUint;

/// The prime field and cyclic subgroup a candidate claims to describe.
///
/// Building it requires p to be prime and a witness point to exist on the
/// curve (found by [`find_generator_point`]); the supplied generator, order
/// and cofactor are recorded as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubgroupStructure {
    p: BigUint,
    g: EcPoint,
    n: BigUint,
    h: BigUint,
    witness: EcPoint,
}

impl SubgroupStructure {
    /// Construct the structure for y² = x³ + ax + b over 𝔽ₚ
    pub fn construct<O: PrimalityOracle>(
        a: &BigUint,
        b: &BigUint,
        p: &BigUint,
        g: EcPoint,
        n: BigUint,
        h: BigUint,
        oracle: &O,
    ) -> Result<Self> {
        if !oracle.is_prime(p) {
            return Err(Error::CompositeModulus {
                context: "SubgroupStructure::construct",
            });
        }
        let witness =
            find_generator_point(a, b, p).with_context("SubgroupStructure::construct")?;
        Ok(SubgroupStructure {
            p: p.clone(),
            g,
            n,
            h,
            witness,
        })
    }

    /// Field prime p
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Claimed generator G
    pub fn generator(&self) -> &EcPoint {
        &self.g
    }

    /// Claimed subgroup order n
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor of the subgroup, as supplied. It is recorded rather than
    /// derived, so it always equals the candidate's h.
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Trace of Frobenius p + 1 − n divisible by p, for p ∉ {2, 3}.
    ///
    /// p is known to be prime here, so the oracle is not consulted again.
    pub fn is_supersingular(&self) -> bool {
        super::trace_vanishes(&self.p, &self.n)
    }

    /// The smallest-x point found on the curve
    pub fn witness(&self) -> &EcPoint {
        &self.witness
    }
}
