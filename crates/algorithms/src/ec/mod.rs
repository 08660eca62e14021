//! Elliptic curve primitives over runtime prime fields
//!
//! This module implements the affine group law on short Weierstrass curves
//! y² = x³ + ax + b over 𝔽ₚ where p, a and b are only known at runtime, plus
//! the deterministic generator-point search used when a field structure is
//! built from scratch.
//!
//! Implements:
//! - An explicit identity variant instead of sentinel coordinates,
//! - Chord-and-tangent addition and doubling with guarded inverses,
//! - Double-and-add scalar multiplication (least significant bit first).
//!
//! None of this is constant time; it evaluates parameters, it does not sign.

mod arithmetic;
mod generator;
mod params;
mod point;

pub use arithmetic::{add, double, negate, scalar_mul};
pub use generator::find_generator_point;
pub use params::CurveParameters;
pub use point::EcPoint;
