//! Validation utilities for curve algorithms

use super::{Error, Result};
use num_bigint::BigUint;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a modulus can define a field (p ≥ 2)
#[inline(always)]
pub fn modulus(context: &'static str, p: &BigUint) -> Result<()> {
    parameter(*p >= BigUint::from(2u32), context, "modulus must be at least 2")
}

/// Validate that an integer is at least `min`
#[inline(always)]
pub fn at_least(context: &'static str, value: &BigUint, min: u32, reason: &'static str) -> Result<()> {
    parameter(*value >= BigUint::from(min), context, reason)
}
