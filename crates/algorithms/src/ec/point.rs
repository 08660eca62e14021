//! Affine elliptic-curve points

use core::fmt;
use num_bigint::BigUint;

/// A point of E(𝔽ₚ): either a finite affine point or the point at infinity.
///
/// The point does not remember which curve it belongs to; the
/// [`CurveParameters`](super::CurveParameters) it is used with decide that.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EcPoint {
    /// The group identity
    Infinity,
    /// A finite point (x, y)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl EcPoint {
    /// Create a finite point from its coordinates
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        EcPoint::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The identity (point at infinity)
    pub const fn infinity() -> Self {
        EcPoint::Infinity
    }

    /// Is this the identity point?
    pub fn is_infinity(&self) -> bool {
        matches!(self, EcPoint::Infinity)
    }

    /// Coordinates of a finite point, `None` for the identity
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            EcPoint::Infinity => None,
            EcPoint::Affine { x, y } => Some((x, y)),
        }
    }

    /// Same point with both coordinates reduced into `[0, p)`
    pub(crate) fn reduced(&self, p: &BigUint) -> Self {
        match self {
            EcPoint::Infinity => EcPoint::Infinity,
            EcPoint::Affine { x, y } => EcPoint::Affine { x: x % p, y: y % p },
        }
    }
}

impl Default for EcPoint {
    fn default() -> Self {
        EcPoint::Infinity
    }
}

impl From<(BigUint, BigUint)> for EcPoint {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        EcPoint::Affine { x, y }
    }
}

impl fmt::Display for EcPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcPoint::Infinity => write!(f, "O"),
            EcPoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
