//! Curve domain parameters (p, a, b, G, n, h)

use super::point::EcPoint;
use crate::error::{validate, Error, Result};
use crate::field::{add_mod, mul_mod};
use curvefit_params::CurveSpec;
use num_bigint::BigUint;
use num_traits::Num;

/// Domain parameters of a short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ.
///
/// Construction reduces `a`, `b` and the generator's coordinates into
/// `[0, p)`. It does not check that the curve is sound or that `G` lies on
/// it; that is the validator's job, and unsound parameter sets must remain
/// representable so they can be scored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurveParameters {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    g: EcPoint,
    n: BigUint,
    h: BigUint,
}

impl CurveParameters {
    /// Build a parameter set; fails only if `p < 2`
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: EcPoint,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self> {
        validate::modulus("CurveParameters::new", &p)?;
        let a = a % &p;
        let b = b % &p;
        let g = g.reduced(&p);
        Ok(CurveParameters { p, a, b, g, n, h })
    }

    /// Parse one of the named curves from `curvefit-params`
    pub fn from_spec(spec: &CurveSpec) -> Result<Self> {
        let parse = |field: &'static str, hex: &str| {
            BigUint::from_str_radix(hex, 16).map_err(|_| {
                Error::param(
                    "CurveParameters::from_spec",
                    format!("{}: malformed hex in field {}", spec.name, field),
                )
            })
        };
        let g = EcPoint::new(parse("g_x", spec.g_x)?, parse("g_y", spec.g_y)?);
        Self::new(
            parse("p", spec.p)?,
            parse("a", spec.a)?,
            parse("b", spec.b)?,
            g,
            parse("n", spec.n)?,
            parse("h", spec.h)?,
        )
    }

    /// Field prime p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient a, reduced mod p
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b, reduced mod p
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Generator G
    pub fn generator(&self) -> &EcPoint {
        &self.g
    }

    /// Subgroup order n (as supplied, never recomputed)
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Right-hand side x³ + ax + b mod p
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let x = x % &self.p;
        let x3 = mul_mod(&mul_mod(&x, &x, &self.p), &x, &self.p);
        let ax = mul_mod(&self.a, &x, &self.p);
        add_mod(&add_mod(&x3, &ax, &self.p), &self.b, &self.p)
    }

    /// Does `point` satisfy y² ≡ x³ + ax + b? The identity always does.
    pub fn is_on_curve(&self, point: &EcPoint) -> bool {
        match point.coordinates() {
            None => true,
            Some((x, y)) => {
                let y = y % &self.p;
                mul_mod(&y, &y, &self.p) == self.rhs(x)
            }
        }
    }

    /// Discriminant term (4a³ + 27b²) mod p; zero means the curve is singular
    pub fn discriminant(&self) -> BigUint {
        let p = &self.p;
        let a3 = mul_mod(&mul_mod(&self.a, &self.a, p), &self.a, p);
        let b2 = mul_mod(&self.b, &self.b, p);
        add_mod(
            &mul_mod(&BigUint::from(4u32), &a3, p),
            &mul_mod(&BigUint::from(27u32), &b2, p),
            p,
        )
    }
}
